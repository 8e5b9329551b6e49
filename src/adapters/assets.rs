use crate::domain::ports::TemplateFetcher;
use crate::utils::error::FetchStatus;
use async_trait::async_trait;
use std::path::PathBuf;

/// Serves bundled assets from a directory on disk (an unpacked web build).
#[derive(Debug, Clone)]
pub struct AssetDirFetcher {
    root: PathBuf,
}

impl AssetDirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateFetcher for AssetDirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchStatus> {
        let full_path = self.root.join(path.trim_start_matches('/'));
        tracing::debug!("Reading bundled asset {}", full_path.display());

        // Mirror what a static file server would answer.
        match tokio::fs::read_to_string(&full_path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FetchStatus::Http(404)),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(FetchStatus::Http(403))
            }
            Err(e) => Err(FetchStatus::Unreachable(e.to_string())),
        }
    }
}
