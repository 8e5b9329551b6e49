use crate::domain::model::StorageTarget;
use crate::domain::ports::{Storage, TemplateFetcher};
use crate::utils::error::{ConfigError, Result};

pub struct DocumentReader<'a, S: Storage, F: TemplateFetcher> {
    storage: &'a S,
    fetcher: &'a F,
}

impl<'a, S: Storage, F: TemplateFetcher> DocumentReader<'a, S, F> {
    pub fn new(storage: &'a S, fetcher: &'a F) -> Self {
        Self { storage, fetcher }
    }

    /// Bundled targets are fetched, device targets are read from storage.
    pub async fn read(&self, target: &StorageTarget) -> Result<String> {
        if target.is_bundled() {
            tracing::debug!("Fetching bundled document {}", target.relative_path);
            return self
                .fetcher
                .fetch_text(&target.relative_path)
                .await
                .map_err(ConfigError::FetchFailed);
        }

        tracing::debug!(
            "Reading {:?}/{} from storage",
            target.scope,
            target.relative_path
        );
        let bytes = self
            .storage
            .read_file(target.scope, &target.relative_path)
            .await
            .map_err(|e| ConfigError::ReadFailed(e.to_string()))?;

        String::from_utf8(bytes)
            .map_err(|e| ConfigError::ReadFailed(format!("document is not valid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::BUNDLED_TEMPLATE_PATH;
    use crate::core::test_support::{MockFetcher, MockStorage, SAMPLE_XML};
    use crate::domain::model::StorageScope;
    use crate::utils::error::FetchStatus;

    #[tokio::test]
    async fn test_bundled_target_uses_fetcher() {
        let storage = MockStorage::new();
        let fetcher = MockFetcher::new().with_template(BUNDLED_TEMPLATE_PATH, SAMPLE_XML);
        let reader = DocumentReader::new(&storage, &fetcher);
        let target = StorageTarget::new(StorageScope::Bundled, BUNDLED_TEMPLATE_PATH);

        let text = reader.read(&target).await.unwrap();

        assert_eq!(text, SAMPLE_XML);
        assert!(storage.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_bundled_fetch_status_is_kept() {
        let storage = MockStorage::new();
        let fetcher = MockFetcher::new().failing(FetchStatus::Http(503));
        let reader = DocumentReader::new(&storage, &fetcher);
        let target = StorageTarget::new(StorageScope::Bundled, BUNDLED_TEMPLATE_PATH);

        let result = reader.read(&target).await;

        assert_eq!(result, Err(ConfigError::FetchFailed(FetchStatus::Http(503))));
    }

    #[tokio::test]
    async fn test_device_target_reads_storage() {
        let storage = MockStorage::new();
        storage
            .insert_file(StorageScope::DocumentsScope, "PoolApp/CONFIG.xml", SAMPLE_XML.as_bytes())
            .await;
        let fetcher = MockFetcher::new();
        let reader = DocumentReader::new(&storage, &fetcher);
        let target = StorageTarget::new(StorageScope::DocumentsScope, "PoolApp/CONFIG.xml");

        assert_eq!(reader.read(&target).await.unwrap(), SAMPLE_XML);
        assert_eq!(fetcher.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_device_document_is_read_failure() {
        let storage = MockStorage::new();
        let fetcher = MockFetcher::new();
        let reader = DocumentReader::new(&storage, &fetcher);
        let target = StorageTarget::new(StorageScope::InternalData, "CONFIG.xml");

        assert!(matches!(
            reader.read(&target).await,
            Err(ConfigError::ReadFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_read_failure() {
        let storage = MockStorage::new();
        storage
            .insert_file(StorageScope::InternalData, "CONFIG.xml", &[0x3c, 0xff, 0xfe])
            .await;
        let fetcher = MockFetcher::new();
        let reader = DocumentReader::new(&storage, &fetcher);
        let target = StorageTarget::new(StorageScope::InternalData, "CONFIG.xml");

        assert!(matches!(
            reader.read(&target).await,
            Err(ConfigError::ReadFailed(r)) if r.contains("UTF-8")
        ));
    }
}
