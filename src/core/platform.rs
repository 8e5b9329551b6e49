use crate::domain::model::{DeviceClass, StoragePreference};
use crate::domain::ports::HostPlatform;

/// Static host description, usually filled from settings or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub native: bool,
    pub platform: String,
}

impl HostInfo {
    pub fn new(native: bool, platform: impl Into<String>) -> Self {
        Self {
            native,
            platform: platform.into(),
        }
    }

    /// A non-native host such as a desktop browser or a plain CLI run.
    pub fn web() -> Self {
        Self::new(false, "web")
    }
}

impl Default for HostInfo {
    fn default() -> Self {
        Self::web()
    }
}

impl HostPlatform for HostInfo {
    fn is_native(&self) -> bool {
        self.native
    }

    fn platform(&self) -> &str {
        &self.platform
    }
}

/// Classifies the host. Pure: only the host identifiers are consulted.
pub fn detect<P: HostPlatform + ?Sized>(host: &P, preference: StoragePreference) -> DeviceClass {
    if !host.is_native() {
        return DeviceClass::Desktop;
    }

    match host.platform().to_ascii_lowercase().as_str() {
        "android" => match preference {
            StoragePreference::Internal => DeviceClass::MobileInternal,
            StoragePreference::External => DeviceClass::MobileExternal,
            StoragePreference::Documents => DeviceClass::MobileDocuments,
        },
        "ios" => DeviceClass::MobileDocuments,
        _ => DeviceClass::Unknown,
    }
}

/// Short host token shown to the user ("Iniciando desde: pc").
pub fn host_label<P: HostPlatform + ?Sized>(host: &P) -> String {
    if !host.is_native() {
        return "pc".to_string();
    }

    let platform = host.platform().trim().to_ascii_lowercase();
    if platform.is_empty() {
        "unknown".to_string()
    } else {
        platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_native_host_is_desktop() {
        let host = HostInfo::web();
        assert_eq!(detect(&host, StoragePreference::External), DeviceClass::Desktop);

        // The platform string is ignored off-device.
        let host = HostInfo::new(false, "android");
        assert_eq!(detect(&host, StoragePreference::Internal), DeviceClass::Desktop);
    }

    #[test]
    fn test_android_follows_storage_preference() {
        let host = HostInfo::new(true, "Android");
        assert_eq!(
            detect(&host, StoragePreference::Internal),
            DeviceClass::MobileInternal
        );
        assert_eq!(
            detect(&host, StoragePreference::External),
            DeviceClass::MobileExternal
        );
        assert_eq!(
            detect(&host, StoragePreference::Documents),
            DeviceClass::MobileDocuments
        );
    }

    #[test]
    fn test_ios_uses_documents_scope() {
        let host = HostInfo::new(true, "ios");
        assert_eq!(
            detect(&host, StoragePreference::External),
            DeviceClass::MobileDocuments
        );
    }

    #[test]
    fn test_unrecognized_native_platform_is_unknown() {
        let host = HostInfo::new(true, "tizen");
        assert_eq!(detect(&host, StoragePreference::Internal), DeviceClass::Unknown);
    }

    #[test]
    fn test_host_label_follows_platform_not_storage() {
        assert_eq!(host_label(&HostInfo::web()), "pc");
        assert_eq!(host_label(&HostInfo::new(true, "Android")), "android");
        assert_eq!(host_label(&HostInfo::new(true, "ios")), "ios");
        assert_eq!(host_label(&HostInfo::new(true, " ")), "unknown");
    }
}
