pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::StoragePreference;
#[cfg(feature = "cli")]
use crate::utils::error::SetupResult;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "terminal-config")]
#[command(about = "Locate, provision and read the terminal CONFIG.xml")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat the host as a native mobile platform
    #[arg(long)]
    pub native: Option<bool>,

    /// Native platform identifier (android, ios, ...)
    #[arg(long)]
    pub platform: Option<String>,

    /// Storage area used on android: internal, external or documents
    #[arg(long)]
    pub storage: Option<StoragePreference>,

    /// Base URL or directory holding the bundled assets
    #[arg(long)]
    pub template: Option<String>,

    /// Print the resulting state as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings file (or defaults) with command-line overrides applied, validated.
    pub fn settings(&self) -> SetupResult<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(native) = self.native {
            settings.host.native = native;
        }
        if let Some(platform) = &self.platform {
            settings.host.platform = platform.clone();
        }
        if let Some(storage) = self.storage {
            settings.host.storage = storage;
        }
        if let Some(template) = &self.template {
            settings.template.source = template.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}
