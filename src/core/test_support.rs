//! In-memory collaborators shared by the stage unit tests.

use crate::domain::model::{PermissionKind, StorageScope};
use crate::domain::ports::{Storage, TemplateFetcher};
use crate::utils::error::{FetchStatus, StorageError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const SAMPLE_XML: &str = "<root><PDA>P1</PDA><Gestor>M1</Gestor><CENTRO>C1</CENTRO><SIG>S1</SIG></root>";

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<(StorageScope, String), Vec<u8>>>>,
    dirs: Arc<Mutex<HashSet<(StorageScope, String)>>>,
    calls: Arc<Mutex<Vec<String>>>,
    deny: bool,
    mkdir_failure: Option<String>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny_permission(mut self) -> Self {
        self.deny = true;
        self
    }

    pub fn fail_mkdir(mut self, reason: &str) -> Self {
        self.mkdir_failure = Some(reason.to_string());
        self
    }

    pub fn fail_read(mut self, reason: &str) -> Self {
        self.read_failure = Some(reason.to_string());
        self
    }

    pub fn fail_write(mut self, reason: &str) -> Self {
        self.write_failure = Some(reason.to_string());
        self
    }

    pub async fn insert_file(&self, scope: StorageScope, path: &str, data: &[u8]) {
        let mut files = self.files.lock().await;
        files.insert((scope, path.to_string()), data.to_vec());
    }

    pub async fn get_file(&self, scope: StorageScope, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(&(scope, path.to_string())).cloned()
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn count(&self, prefix: &str) -> usize {
        let calls = self.calls.lock().await;
        calls.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub async fn mkdir_count(&self) -> usize {
        self.count("mkdir:").await
    }

    pub async fn write_count(&self) -> usize {
        self.count("write:").await
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

impl Storage for MockStorage {
    async fn request_permission(&self, kind: PermissionKind) -> bool {
        self.record(format!("permission:{:?}", kind)).await;
        !self.deny
    }

    async fn create_directory(
        &self,
        scope: StorageScope,
        path: &str,
        _recursive: bool,
    ) -> Result<(), StorageError> {
        self.record(format!("mkdir:{:?}:{}", scope, path)).await;
        if let Some(reason) = &self.mkdir_failure {
            return Err(StorageError::Io(reason.clone()));
        }
        let mut dirs = self.dirs.lock().await;
        if !dirs.insert((scope, path.to_string())) {
            return Err(StorageError::AlreadyExists(path.to_string()));
        }
        Ok(())
    }

    async fn read_file(&self, scope: StorageScope, path: &str) -> Result<Vec<u8>, StorageError> {
        self.record(format!("read:{:?}:{}", scope, path)).await;
        if let Some(reason) = &self.read_failure {
            return Err(StorageError::Io(reason.clone()));
        }
        self.get_file(scope, path)
            .await
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write_file(
        &self,
        scope: StorageScope,
        path: &str,
        data: &[u8],
    ) -> Result<(), StorageError> {
        self.record(format!("write:{:?}:{}", scope, path)).await;
        if let Some(reason) = &self.write_failure {
            return Err(StorageError::Io(reason.clone()));
        }
        self.insert_file(scope, path, data).await;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockFetcher {
    templates: HashMap<String, String>,
    failure: Option<FetchStatus>,
    fetches: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, path: &str, text: &str) -> Self {
        self.templates.insert(path.to_string(), text.to_string());
        self
    }

    pub fn failing(mut self, status: FetchStatus) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TemplateFetcher for MockFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchStatus> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = &self.failure {
            return Err(status.clone());
        }
        self.templates
            .get(path)
            .cloned()
            .ok_or(FetchStatus::Http(404))
    }
}
