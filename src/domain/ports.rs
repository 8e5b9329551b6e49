use crate::domain::model::{PermissionKind, StorageScope};
use crate::utils::error::{FetchStatus, StorageError};
use async_trait::async_trait;

/// Filesystem-like collaborator used by the resolver, provisioner and reader.
pub trait Storage: Send + Sync {
    fn request_permission(
        &self,
        kind: PermissionKind,
    ) -> impl std::future::Future<Output = bool> + Send;

    fn create_directory(
        &self,
        scope: StorageScope,
        path: &str,
        recursive: bool,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    fn read_file(
        &self,
        scope: StorageScope,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, StorageError>> + Send;

    fn write_file(
        &self,
        scope: StorageScope,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}

/// Retrieves bundled assets by their package-relative path.
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchStatus>;
}

/// Host-provided platform identifiers.
pub trait HostPlatform: Send + Sync {
    fn is_native(&self) -> bool;
    fn platform(&self) -> &str;
}
