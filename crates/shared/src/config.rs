//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of occurrences generated for a recurring expense with
    /// neither an occurrence count nor an end date.
    #[serde(default = "default_occurrence_cap")]
    pub occurrence_cap: u32,
    /// Reminder lead time applied when a definition does not specify one.
    #[serde(default = "default_remind_before_days")]
    pub default_remind_before_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            occurrence_cap: default_occurrence_cap(),
            default_remind_before_days: default_remind_before_days(),
        }
    }
}

fn default_occurrence_cap() -> u32 {
    12
}

fn default_remind_before_days() -> u32 {
    1
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory CSV exports are written to.
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

fn default_export_directory() -> String {
    ".".to_string()
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding expense records.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    "expenses.json".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPENDWISE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
