use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Host classification, decided once per loading run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceClass {
    Desktop,
    MobileInternal,
    MobileExternal,
    MobileDocuments,
    Unknown,
}

/// Which storage area a mobile host should keep its copy in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoragePreference {
    #[default]
    Internal,
    External,
    Documents,
}

impl std::str::FromStr for StoragePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(StoragePreference::Internal),
            "external" => Ok(StoragePreference::External),
            "documents" => Ok(StoragePreference::Documents),
            other => Err(format!(
                "unknown storage preference '{}' (expected internal, external or documents)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StorageScope {
    /// Read-only assets shipped with the application package.
    Bundled,
    InternalData,
    ExternalPublic,
    DocumentsScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PermissionKind {
    PublicStorage,
}

/// Steps a scope demands before its document can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRitual {
    pub permission: Option<PermissionKind>,
    pub create_directory: bool,
    pub provision: bool,
}

impl StorageScope {
    pub const fn ritual(self) -> AccessRitual {
        match self {
            StorageScope::Bundled => AccessRitual {
                permission: None,
                create_directory: false,
                provision: false,
            },
            StorageScope::InternalData => AccessRitual {
                permission: None,
                create_directory: false,
                provision: true,
            },
            StorageScope::ExternalPublic => AccessRitual {
                permission: Some(PermissionKind::PublicStorage),
                create_directory: true,
                provision: true,
            },
            StorageScope::DocumentsScope => AccessRitual {
                permission: None,
                create_directory: true,
                provision: true,
            },
        }
    }
}

/// Where the configuration document lives for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageTarget {
    pub scope: StorageScope,
    pub relative_path: String,
}

impl StorageTarget {
    pub fn new(scope: StorageScope, relative_path: impl Into<String>) -> Self {
        Self {
            scope,
            relative_path: relative_path.into(),
        }
    }

    pub fn is_bundled(&self) -> bool {
        self.scope == StorageScope::Bundled
    }

    /// Directory holding the document, if it is not at the scope root.
    pub fn parent_dir(&self) -> Option<&str> {
        self.relative_path
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .filter(|dir| !dir.is_empty())
    }
}

/// Terminal identity read from the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    pub pda: String,
    pub manager: String,
    pub center: String,
    pub sig: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value")]
pub enum ConfigState {
    #[default]
    Empty,
    Ready(ConfigRecord),
    Failed(ConfigError),
}

impl ConfigState {
    pub fn is_empty(&self) -> bool {
        matches!(self, ConfigState::Empty)
    }

    pub fn record(&self) -> Option<&ConfigRecord> {
        match self {
            ConfigState::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConfigError> {
        match self {
            ConfigState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<crate::utils::error::Result<ConfigRecord>> for ConfigState {
    fn from(result: crate::utils::error::Result<ConfigRecord>) -> Self {
        match result {
            Ok(record) => ConfigState::Ready(record),
            Err(err) => ConfigState::Failed(err),
        }
    }
}
