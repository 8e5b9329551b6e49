pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AssetDirFetcher, HttpTemplateFetcher, TemplateSource};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    loader::ConfigLoader,
    parser::{parse, PLACEHOLDER},
    platform::{detect, host_label, HostInfo},
    presenter::render,
    publisher::{StatePublisher, SubscriptionId},
    resolver::{StorageLayout, StorageResolver, BUNDLED_TEMPLATE_PATH},
};
pub use domain::model::{
    ConfigRecord, ConfigState, DeviceClass, StoragePreference, StorageScope, StorageTarget,
};
pub use utils::error::{ConfigError, FetchStatus, Result, SetupError, StorageError};
