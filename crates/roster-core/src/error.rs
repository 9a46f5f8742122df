//! Unified error type for the data-access layer.

use thiserror::Error;

/// Unified error type for Roster.
///
/// Covers domain failures (missing rows, invalid data, constraint
/// conflicts) and infrastructure failures (database, configuration).
#[derive(Error, Debug)]
pub enum RosterError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate key)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // MySQL 1062 / PostgreSQL 23505: unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "1062" || code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for RosterError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::not_found("Person", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(RosterError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(RosterError::database("db").error_code(), "DATABASE_ERROR");
        assert_eq!(RosterError::internal("oops").error_code(), "INTERNAL_ERROR");
        assert_eq!(
            RosterError::Configuration("bad".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_retriable_errors() {
        assert!(RosterError::database("connection lost").is_retriable());
        assert!(!RosterError::not_found("Person", 1).is_retriable());
        assert!(!RosterError::validation("bad input").is_retriable());
        assert!(!RosterError::conflict("dup").is_retriable());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = RosterError::not_found("Person", "123");
        assert!(not_found.to_string().contains("Person"));
        assert!(not_found.to_string().contains("123"));

        let validation = RosterError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = RosterError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));
    }

    #[test]
    fn test_validation_errors_conversion() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("first_name", validator::ValidationError::new("length"));
        let err: RosterError = errors.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
