use crate::core::Storage;
use crate::domain::model::{PermissionKind, StorageScope};
use crate::utils::error::StorageError;
use std::path::{Path, PathBuf};

/// Filesystem-backed storage with one root directory per scope.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    internal_root: PathBuf,
    external_root: PathBuf,
    documents_root: PathBuf,
    grant_external: bool,
}

impl LocalStorage {
    pub fn new(
        internal_root: impl Into<PathBuf>,
        external_root: impl Into<PathBuf>,
        documents_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            internal_root: internal_root.into(),
            external_root: external_root.into(),
            documents_root: documents_root.into(),
            grant_external: true,
        }
    }

    /// All three scopes as subdirectories of `base`.
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self::new(
            base.join("internal"),
            base.join("external"),
            base.join("documents"),
        )
    }

    pub fn with_external_permission(mut self, granted: bool) -> Self {
        self.grant_external = granted;
        self
    }

    fn root(&self, scope: StorageScope) -> Result<&Path, StorageError> {
        match scope {
            StorageScope::InternalData => Ok(&self.internal_root),
            StorageScope::ExternalPublic => Ok(&self.external_root),
            StorageScope::DocumentsScope => Ok(&self.documents_root),
            StorageScope::Bundled => Err(StorageError::Unsupported(format!("{:?}", scope))),
        }
    }

    fn full_path(&self, scope: StorageScope, path: &str) -> Result<PathBuf, StorageError> {
        Ok(self.root(scope)?.join(path))
    }
}

impl Storage for LocalStorage {
    async fn request_permission(&self, kind: PermissionKind) -> bool {
        match kind {
            PermissionKind::PublicStorage => self.grant_external,
        }
    }

    async fn create_directory(
        &self,
        scope: StorageScope,
        path: &str,
        recursive: bool,
    ) -> Result<(), StorageError> {
        let full_path = self.full_path(scope, path)?;

        if let Ok(metadata) = tokio::fs::metadata(&full_path).await {
            let shown = full_path.display().to_string();
            return if metadata.is_dir() {
                Err(StorageError::AlreadyExists(shown))
            } else {
                Err(StorageError::Io(format!("{} exists and is not a directory", shown)))
            };
        }

        if recursive {
            tokio::fs::create_dir_all(&full_path).await?;
        } else {
            tokio::fs::create_dir(&full_path).await?;
        }
        Ok(())
    }

    async fn read_file(&self, scope: StorageScope, path: &str) -> Result<Vec<u8>, StorageError> {
        let full_path = self.full_path(scope, path)?;
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(
        &self,
        scope: StorageScope,
        path: &str,
        data: &[u8],
    ) -> Result<(), StorageError> {
        let full_path = self.full_path(scope, path)?;

        // The internal scope is a flat area that may not exist yet on first run.
        if let Some(parent) = full_path.parent() {
            if scope == StorageScope::InternalData {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}
