// Adapters layer: concrete template fetchers for the places a bundled asset can live.

pub mod assets;
pub mod http;

use crate::domain::ports::TemplateFetcher;
use crate::utils::error::{FetchStatus, SetupResult};
use async_trait::async_trait;

pub use assets::AssetDirFetcher;
pub use http::HttpTemplateFetcher;

/// Any `scheme://` source is remote; non-http schemes are rejected by validation.
pub fn is_remote_source(source: &str) -> bool {
    source.contains("://")
}

/// Fetcher picked from the `[template].source` setting.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Http(HttpTemplateFetcher),
    Directory(AssetDirFetcher),
}

impl TemplateSource {
    /// Remote sources are fetched over HTTP, anything else is a directory.
    pub fn from_source(source: &str) -> SetupResult<Self> {
        if is_remote_source(source) {
            Ok(TemplateSource::Http(HttpTemplateFetcher::new(source)?))
        } else {
            Ok(TemplateSource::Directory(AssetDirFetcher::new(source)))
        }
    }
}

#[async_trait]
impl TemplateFetcher for TemplateSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchStatus> {
        match self {
            TemplateSource::Http(fetcher) => fetcher.fetch_text(path).await,
            TemplateSource::Directory(fetcher) => fetcher.fetch_text(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_picks_fetcher() {
        assert!(matches!(
            TemplateSource::from_source("http://localhost:8100/").unwrap(),
            TemplateSource::Http(_)
        ));
        assert!(matches!(
            TemplateSource::from_source("./www").unwrap(),
            TemplateSource::Directory(_)
        ));
    }

    #[test]
    fn test_scheme_case_does_not_change_fetcher() {
        assert!(matches!(
            TemplateSource::from_source("HTTP://localhost:8100/").unwrap(),
            TemplateSource::Http(_)
        ));
        assert!(TemplateSource::from_source("ftp://example.com/").is_err());
    }
}
