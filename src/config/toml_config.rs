use crate::adapters::TemplateSource;
use crate::config::cli::LocalStorage;
use crate::core::platform::HostInfo;
use crate::core::resolver::{StorageLayout, StorageResolver, DEFAULT_DIRECTORY, DEFAULT_FILE_NAME};
use crate::domain::model::StoragePreference;
use crate::utils::error::{SetupError, SetupResult};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub host: HostConfig,
    pub storage: StorageConfig,
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub native: bool,
    pub platform: String,
    pub storage: StoragePreference,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            native: false,
            platform: "web".to_string(),
            storage: StoragePreference::Internal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub internal_root: String,
    pub external_root: String,
    pub documents_root: String,
    pub directory: String,
    pub file_name: String,
    pub grant_external_permission: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            internal_root: "./data/internal".to_string(),
            external_root: "./data/external".to_string(),
            documents_root: "./data/documents".to_string(),
            directory: DEFAULT_DIRECTORY.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            grant_external_permission: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Base URL of the web build, or the directory it was unpacked to.
    pub source: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            source: "./www".to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> SetupResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> SetupResult<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SetupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> SetupResult<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SetupError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> SetupResult<()> {
        validation::validate_non_empty_string("host.platform", &self.host.platform)?;

        validation::validate_path("storage.internal_root", &self.storage.internal_root)?;
        validation::validate_path("storage.external_root", &self.storage.external_root)?;
        validation::validate_path("storage.documents_root", &self.storage.documents_root)?;
        validation::validate_plain_name("storage.directory", &self.storage.directory)?;
        validation::validate_plain_name("storage.file_name", &self.storage.file_name)?;

        if self.is_remote_template() {
            validation::validate_url("template.source", &self.template.source)?;
        } else {
            validation::validate_path("template.source", &self.template.source)?;
        }

        Ok(())
    }

    pub fn is_remote_template(&self) -> bool {
        crate::adapters::is_remote_source(&self.template.source)
    }

    pub fn host_info(&self) -> HostInfo {
        HostInfo::new(self.host.native, self.host.platform.clone())
    }

    pub fn preference(&self) -> StoragePreference {
        self.host.storage
    }

    pub fn resolver(&self) -> StorageResolver {
        StorageResolver::new(StorageLayout {
            file_name: self.storage.file_name.clone(),
            directory: self.storage.directory.clone(),
        })
    }

    pub fn local_storage(&self) -> LocalStorage {
        LocalStorage::new(
            &self.storage.internal_root,
            &self.storage.external_root,
            &self.storage.documents_root,
        )
        .with_external_permission(self.storage.grant_external_permission)
    }

    pub fn template_source(&self) -> SetupResult<TemplateSource> {
        TemplateSource::from_source(&self.template.source)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> SetupResult<()> {
        self.validate_config()
    }
}
