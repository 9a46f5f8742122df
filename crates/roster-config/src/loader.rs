//! Configuration loader with layered sources.

use crate::{validate_config, AppConfig};
use config::{Config, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. Environment variables with `ROSTER_` prefix
    ///
    /// The loaded configuration is validated before use.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| RosterError::Configuration(format!("Failed to load config: {}", e)))?;

        validate_config(&config)
            .map_err(|e| RosterError::Configuration(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_missing_directory_uses_defaults() {
        let loader = ConfigLoader::new("/nonexistent/config/dir").unwrap();
        let config = loader.get().await;
        assert_eq!(config.app.name, "roster");
        assert_eq!(config.database.max_connections, 20);
    }

    #[tokio::test]
    async fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[database]\nurl = \"mysql://test:test@db:3306/test\"\nmin_connections = 1\nmax_connections = 3\nconnect_timeout_secs = 5\nidle_timeout_secs = 60\nlog_queries = true"
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.database.url, "mysql://test:test@db:3306/test");
        assert_eq!(config.database.max_connections, 3);
        assert!(config.database.log_queries);
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[database]\nmax_connections = 7\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(loader.get().await.database.max_connections, 7);

        std::fs::write(&path, "[database]\nmax_connections = 9\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.database.max_connections, 9);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(
            &path,
            "[database]\nmin_connections = 50\nmax_connections = 5\n",
        )
        .unwrap();

        let result = ConfigLoader::new(dir.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
