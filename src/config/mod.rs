//! Configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for the task list service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Whether tasks are mirrored to a snapshot file
    pub persistence: PersistenceMode,

    /// Snapshot file used when persistence is `snapshot`
    pub snapshot_path: String,

    /// Artificial duration of a background job in seconds
    pub job_delay_secs: u64,

    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
}

/// How the repository keeps its tasks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceMode {
    /// Tasks live only for the lifetime of the process
    Memory,
    /// Tasks are reloaded from and written back to a JSON file
    #[serde(alias = "file")]
    Snapshot,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            persistence: PersistenceMode::Snapshot,
            snapshot_path: "task.json".to_string(),
            job_delay_secs: 5,
            shutdown_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from file, environment variables, or defaults
    pub fn load() -> crate::Result<Self> {
        if let Ok(config_path) = env::var("TASK_LIST_CONFIG") {
            info!("Loading config from TASK_LIST_CONFIG: {}", config_path);
            return Self::from_file(&config_path);
        }

        let default_paths = [
            "config.yaml",
            "config.toml",
            "config/config.yaml",
            "config/config.toml",
        ];

        for path in default_paths {
            if Path::new(path).exists() {
                info!("Loading config from: {}", path);
                return Self::from_file(path);
            }
        }

        if let Ok(config) = Self::from_env() {
            info!("Loaded config from environment variables");
            return Ok(config);
        }

        warn!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| {
                crate::TaskListError::ConfigError(format!("Failed to load config file: {}", e))
            })?;

        let config: Config = settings.try_deserialize().map_err(|e| {
            crate::TaskListError::ConfigError(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Self::default();
        let mut found_any = false;

        if let Ok(val) = env::var("TASK_LIST_HOST") {
            config.host = val;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_PORT") {
            config.port = val.parse().map_err(|e| {
                crate::TaskListError::ConfigError(format!("Invalid PORT: {}", e))
            })?;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_PERSISTENCE") {
            config.persistence = match val.to_lowercase().as_str() {
                "memory" => PersistenceMode::Memory,
                "snapshot" | "file" => PersistenceMode::Snapshot,
                _ => {
                    return Err(crate::TaskListError::ConfigError(format!(
                        "Invalid PERSISTENCE: {}",
                        val
                    )))
                }
            };
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_SNAPSHOT_PATH") {
            config.snapshot_path = val;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_JOB_DELAY_SECS") {
            config.job_delay_secs = val.parse().map_err(|e| {
                crate::TaskListError::ConfigError(format!("Invalid JOB_DELAY_SECS: {}", e))
            })?;
            found_any = true;
        }

        if let Ok(val) = env::var("TASK_LIST_SHUTDOWN_TIMEOUT_SECS") {
            config.shutdown_timeout_secs = val.parse().map_err(|e| {
                crate::TaskListError::ConfigError(format!("Invalid SHUTDOWN_TIMEOUT_SECS: {}", e))
            })?;
            found_any = true;
        }

        if !found_any {
            return Err(crate::TaskListError::ConfigError(
                "No environment variables found".to_string(),
            ));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.port == 0 {
            return Err(crate::TaskListError::ConfigError(
                "Port must be greater than 0".to_string(),
            ));
        }

        if self.persistence == PersistenceMode::Snapshot && self.snapshot_path.trim().is_empty() {
            return Err(crate::TaskListError::ConfigError(
                "Snapshot path must not be empty when persistence is enabled".to_string(),
            ));
        }

        if self.shutdown_timeout_secs == 0 {
            return Err(crate::TaskListError::ConfigError(
                "Shutdown timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
