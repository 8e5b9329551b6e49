pub mod loader;
pub mod parser;
pub mod platform;
pub mod presenter;
pub mod provisioner;
pub mod publisher;
pub mod reader;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    ConfigRecord, ConfigState, DeviceClass, StoragePreference, StorageScope, StorageTarget,
};
pub use crate::domain::ports::{HostPlatform, Storage, TemplateFetcher};
pub use crate::utils::error::Result;
