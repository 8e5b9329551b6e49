use crate::domain::model::{DeviceClass, StorageScope, StorageTarget};
use crate::domain::ports::Storage;
use crate::utils::error::{ConfigError, Result, StorageError};

/// Package-relative path of the template shipped with the application.
pub const BUNDLED_TEMPLATE_PATH: &str = "assets/CONFIG/CONFIG.xml";

pub const DEFAULT_FILE_NAME: &str = "CONFIG.xml";
pub const DEFAULT_DIRECTORY: &str = "PoolApp";

/// Names used to build device-side paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub file_name: String,
    /// Subdirectory used by the shared scopes (external, documents).
    pub directory: String,
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            directory: DEFAULT_DIRECTORY.to_string(),
        }
    }
}

const SCOPE_TABLE: [(DeviceClass, StorageScope); 4] = [
    (DeviceClass::Desktop, StorageScope::Bundled),
    (DeviceClass::MobileInternal, StorageScope::InternalData),
    (DeviceClass::MobileExternal, StorageScope::ExternalPublic),
    (DeviceClass::MobileDocuments, StorageScope::DocumentsScope),
];

#[derive(Debug, Clone, Default)]
pub struct StorageResolver {
    layout: StorageLayout,
}

impl StorageResolver {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Maps a device class to its storage target. Performs no I/O.
    pub fn resolve(&self, class: DeviceClass) -> Result<StorageTarget> {
        let scope = SCOPE_TABLE
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, scope)| *scope)
            .ok_or(ConfigError::PlatformUnknown)?;

        let ritual = scope.ritual();
        let path = if scope == StorageScope::Bundled {
            BUNDLED_TEMPLATE_PATH.to_string()
        } else if ritual.create_directory {
            format!("{}/{}", self.layout.directory, self.layout.file_name)
        } else {
            self.layout.file_name.clone()
        };

        Ok(StorageTarget::new(scope, path))
    }

    /// Runs the scope's access ritual: permission first, then the directory.
    pub async fn prepare<S: Storage>(&self, storage: &S, target: &StorageTarget) -> Result<()> {
        let ritual = target.scope.ritual();

        if let Some(kind) = ritual.permission {
            tracing::debug!("Requesting {:?} permission", kind);
            if !storage.request_permission(kind).await {
                tracing::warn!("Permission {:?} denied", kind);
                return Err(ConfigError::PermissionDenied);
            }
        }

        if ritual.create_directory {
            if let Some(dir) = target.parent_dir() {
                match storage.create_directory(target.scope, dir, true).await {
                    Ok(()) => tracing::debug!("Created directory {:?}/{}", target.scope, dir),
                    Err(StorageError::AlreadyExists(_)) => {
                        tracing::debug!("Directory {:?}/{} already exists", target.scope, dir)
                    }
                    Err(e) => return Err(ConfigError::DirectoryCreateFailed(e.to_string())),
                }
            }
        }

        Ok(())
    }
}
