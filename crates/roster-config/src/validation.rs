//! Configuration validation.
//!
//! Validates configuration values up front so bad settings fail at load
//! time rather than on first use of the pool.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Maximum allowed connection pool size.
const MAX_POOL_SIZE: u32 = 100;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// Database URL format is invalid.
    InvalidUrl { message: String },
    /// Database URL scheme is not supported.
    UnsupportedScheme { scheme: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min_connections ({}) exceeds max_connections ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size too large: {} (maximum {})", value, maximum)
            }
            Self::InvalidUrl { message } => {
                write!(f, "Invalid database URL: {}", message)
            }
            Self::UnsupportedScheme { scheme } => {
                write!(f, "Unsupported database URL scheme: {}", scheme)
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout {} must be positive", name)
            }
            Self::InvalidLogLevel { value } => {
                write!(f, "Invalid log level: {}", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validates the full application configuration.
///
/// Returns the first problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigValidationError> {
    let db = &config.database;

    if db.min_connections > db.max_connections {
        return Err(ConfigValidationError::InvalidPoolSize {
            min: db.min_connections,
            max: db.max_connections,
        });
    }

    if db.max_connections > MAX_POOL_SIZE {
        return Err(ConfigValidationError::PoolSizeTooLarge {
            value: db.max_connections,
            maximum: MAX_POOL_SIZE,
        });
    }

    let url = Url::parse(&db.url).map_err(|e| ConfigValidationError::InvalidUrl {
        message: e.to_string(),
    })?;

    if url.scheme() != "mysql" {
        return Err(ConfigValidationError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }

    if db.connect_timeout_secs == 0 {
        return Err(ConfigValidationError::NonPositiveTimeout {
            name: "connect_timeout_secs".to_string(),
        });
    }

    if db.idle_timeout_secs == 0 {
        return Err(ConfigValidationError::NonPositiveTimeout {
            name: "idle_timeout_secs".to_string(),
        });
    }

    // The level may be a bare level or a full env-filter directive; only
    // reject the bare levels we know are wrong.
    let level = config.logging.level.to_lowercase();
    let known = ["trace", "debug", "info", "warn", "error", "off"];
    if !level.contains('=') && !level.contains(',') && !known.contains(&level.as_str()) {
        return Err(ConfigValidationError::InvalidLogLevel {
            value: config.logging.level.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let mut config = AppConfig::default();
        config.database.min_connections = 30;
        config.database.max_connections = 10;
        assert_eq!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidPoolSize { min: 30, max: 10 })
        );
    }

    #[test]
    fn test_oversized_pool_is_rejected() {
        let mut config = AppConfig::default();
        config.database.max_connections = 500;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::PoolSizeTooLarge { .. })
        ));
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let mut config = AppConfig::default();
        config.database.url = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_non_mysql_scheme_is_rejected() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://x:y@localhost/db".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.database.connect_timeout_secs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::NonPositiveTimeout { .. })
        ));
    }

    #[test]
    fn test_env_filter_directives_are_accepted() {
        let mut config = AppConfig::default();
        config.logging.level = "roster_dao=debug,info".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigValidationError::InvalidLogLevel { .. })
        ));
    }
}
