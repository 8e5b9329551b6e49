use serde::Serialize;
use thiserror::Error;

/// Failure of one loading stage. Carried inside `ConfigState::Failed`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ConfigError {
    #[error("Storage permission was denied")]
    PermissionDenied,

    #[error("Could not create the configuration directory: {0}")]
    DirectoryCreateFailed(String),

    #[error("Template fetch failed: {0}")]
    FetchFailed(FetchStatus),

    #[error("Could not read the configuration file: {0}")]
    ReadFailed(String),

    #[error("Could not write the configuration file: {0}")]
    WriteFailed(String),

    #[error("Could not parse the configuration XML: {0}")]
    ParseFailed(String),

    #[error("Unrecognized mobile platform")]
    PlatformUnknown,
}

/// Outcome of a storage collaborator call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("scope is not backed by storage: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(err.to_string()),
            std::io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(err.to_string()),
            _ => StorageError::Io(err.to_string()),
        }
    }
}

/// Why a template fetch did not produce text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum FetchStatus {
    #[error("HTTP status {0}")]
    Http(u16),

    #[error("unreachable ({0})")]
    Unreachable(String),
}

/// Errors raised while assembling the loader (settings, validation, adapters).
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl SetupError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SetupError::IoError(_) => "Check that the settings file exists and is readable",
            SetupError::ConfigValidationError { .. } => "Fix the TOML syntax in the settings file",
            SetupError::InvalidConfigValueError { .. } => {
                "Correct the reported field in the settings file or on the command line"
            }
            SetupError::HttpClientError(_) => "Check the TLS setup of this host",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
pub type SetupResult<T> = std::result::Result<T, SetupError>;
