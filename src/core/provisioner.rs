use crate::core::resolver::BUNDLED_TEMPLATE_PATH;
use crate::domain::model::StorageTarget;
use crate::domain::ports::{Storage, TemplateFetcher};
use crate::utils::error::{ConfigError, Result, StorageError};

/// Copies the bundled template onto the device the first time it is needed.
pub struct AssetProvisioner<'a, S: Storage, F: TemplateFetcher> {
    storage: &'a S,
    fetcher: &'a F,
}

impl<'a, S: Storage, F: TemplateFetcher> AssetProvisioner<'a, S, F> {
    pub fn new(storage: &'a S, fetcher: &'a F) -> Self {
        Self { storage, fetcher }
    }

    /// An existing copy is never replaced, even if the template changed since.
    pub async fn ensure_provisioned(&self, target: &StorageTarget) -> Result<()> {
        if target.is_bundled() {
            tracing::debug!("Bundled target needs no provisioning");
            return Ok(());
        }

        match self
            .storage
            .read_file(target.scope, &target.relative_path)
            .await
        {
            Ok(_) => {
                tracing::debug!(
                    "{:?}/{} already present, skipping copy",
                    target.scope,
                    target.relative_path
                );
                return Ok(());
            }
            Err(StorageError::NotFound(_)) => {}
            Err(e) => return Err(ConfigError::ReadFailed(e.to_string())),
        }

        tracing::info!(
            "Copying {} to {:?}/{}",
            BUNDLED_TEMPLATE_PATH,
            target.scope,
            target.relative_path
        );
        let template = self
            .fetcher
            .fetch_text(BUNDLED_TEMPLATE_PATH)
            .await
            .map_err(ConfigError::FetchFailed)?;

        self.storage
            .write_file(target.scope, &target.relative_path, template.as_bytes())
            .await
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        tracing::debug!("Template copied ({} bytes)", template.len());
        Ok(())
    }
}
