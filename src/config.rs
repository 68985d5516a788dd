use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::Theme;
use crate::services::IntakeOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub intake: IntakeSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeSettings {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_max_batch_files")]
    pub max_batch_files: usize,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            allowed_extensions: default_allowed_extensions(),
            max_batch_files: default_max_batch_files(),
        }
    }
}

impl IntakeSettings {
    pub fn options(&self) -> IntakeOptions {
        IntakeOptions {
            delay: Duration::from_millis(self.delay_ms),
            allowed_extensions: self.allowed_extensions.clone(),
            max_batch_files: self.max_batch_files,
        }
    }
}

fn default_delay_ms() -> u64 { 1500 }
fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()]
}
fn default_max_batch_files() -> usize { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub default: Theme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENTHUB_)
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        Self::build(builder, environment())
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables and platform overrides apply the same way as in
    /// [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from(path.as_ref()));

        Self::build(builder, environment())
    }

    fn build(builder: ConfigBuilder<DefaultState>, env: Environment) -> Result<Self, ConfigError> {
        let settings = builder.add_source(env).build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }
}

/// Environment source shared by every loader
///
/// e.g., TALENTHUB__SERVER__PORT -> server.port, and
/// TALENTHUB__INTAKE__ALLOWED_EXTENSIONS=pdf,txt -> intake.allowed_extensions
fn environment() -> Environment {
    Environment::with_prefix("TALENTHUB")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("intake.allowed_extensions")
        .try_parsing(true)
}

/// Honour the bare `PORT` and `LOG_LEVEL` variables set by most hosting platforms
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }

    builder.build()
}
