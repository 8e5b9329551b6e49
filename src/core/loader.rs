use crate::core::parser;
use crate::core::platform;
use crate::core::provisioner::AssetProvisioner;
use crate::core::publisher::StatePublisher;
use crate::core::reader::DocumentReader;
use crate::core::resolver::StorageResolver;
use crate::domain::model::{ConfigRecord, ConfigState, DeviceClass, StoragePreference};
use crate::domain::ports::{HostPlatform, Storage, TemplateFetcher};
use crate::utils::error::Result;
use std::sync::{Arc, Mutex};

/// Runs detection, resolution, provisioning, reading and parsing in order and
/// publishes the outcome. Callers must not run two loads of one loader at once.
pub struct ConfigLoader<S: Storage, F: TemplateFetcher, P: HostPlatform> {
    storage: S,
    fetcher: F,
    host: P,
    preference: StoragePreference,
    resolver: StorageResolver,
    publisher: Arc<StatePublisher>,
    device_class: Mutex<Option<DeviceClass>>,
}

impl<S: Storage, F: TemplateFetcher, P: HostPlatform> ConfigLoader<S, F, P> {
    pub fn new(storage: S, fetcher: F, host: P) -> Self {
        Self {
            storage,
            fetcher,
            host,
            preference: StoragePreference::default(),
            resolver: StorageResolver::default(),
            publisher: StatePublisher::shared(),
            device_class: Mutex::new(None),
        }
    }

    pub fn with_preference(mut self, preference: StoragePreference) -> Self {
        self.preference = preference;
        self
    }

    pub fn with_resolver(mut self, resolver: StorageResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_publisher(mut self, publisher: Arc<StatePublisher>) -> Self {
        self.publisher = publisher;
        self
    }

    pub fn publisher(&self) -> &Arc<StatePublisher> {
        &self.publisher
    }

    /// Host token for display, taken from the platform identifiers.
    pub fn host_label(&self) -> String {
        platform::host_label(&self.host)
    }

    /// Class detected by the last run, `None` before the first one.
    pub fn device_class(&self) -> Option<DeviceClass> {
        *self
            .device_class
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub async fn run(&self) -> ConfigState {
        tracing::info!("Loading terminal configuration");
        let state = ConfigState::from(self.load().await);

        match &state {
            ConfigState::Ready(record) => {
                tracing::info!("Configuration ready for PDA {}", record.pda)
            }
            ConfigState::Failed(err) => tracing::error!("Configuration load failed: {}", err),
            ConfigState::Empty => {}
        }

        self.publisher.publish(state.clone());
        state
    }

    async fn load(&self) -> Result<ConfigRecord> {
        let class = platform::detect(&self.host, self.preference);
        *self
            .device_class
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(class);
        tracing::info!("Device type: {} ({:?})", self.host_label(), class);

        let target = self.resolver.resolve(class)?;
        tracing::debug!("Resolved target {:?}", target);

        self.resolver.prepare(&self.storage, &target).await?;

        if target.scope.ritual().provision {
            AssetProvisioner::new(&self.storage, &self.fetcher)
                .ensure_provisioned(&target)
                .await?;
        }

        let text = DocumentReader::new(&self.storage, &self.fetcher)
            .read(&target)
            .await?;

        parser::parse(&text)
    }
}
