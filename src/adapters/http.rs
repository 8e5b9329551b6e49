use crate::domain::ports::TemplateFetcher;
use crate::utils::error::{FetchStatus, SetupError, SetupResult};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches bundled assets from the web server hosting the application.
#[derive(Debug, Clone)]
pub struct HttpTemplateFetcher {
    client: Client,
    base_url: Url,
}

impl HttpTemplateFetcher {
    pub fn new(base_url: &str) -> SetupResult<Self> {
        validate_url("template.source", base_url)?;

        // Without a trailing slash `join` would replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| SetupError::InvalidConfigValueError {
            field: "template.source".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl TemplateFetcher for HttpTemplateFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchStatus> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchStatus::Unreachable(e.to_string()))?;

        tracing::debug!("Making template request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchStatus::Unreachable(e.to_string()))?;

        tracing::debug!("Template response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FetchStatus::Http(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchStatus::Unreachable(e.to_string()))
    }
}
