//! Typed error handling for the medrec query engine
//!
//! The filter pipeline itself raises no domain errors. What can fail is
//! the surrounding plumbing, and each concern gets its own category:
//!
//! - [`StorageError`]: faults reported by a record source (propagated untouched)
//! - [`ConfigError`]: configuration parsing and validation
//! - [`ValidationError`]: criteria rejected by the optional validation helper
//!
//! # Example
//!
//! ```rust,ignore
//! use medrec::prelude::*;
//!
//! match repository.filter(&criteria).await {
//!     Ok(response) => println!("{} of {}", response.items.len(), response.total),
//!     Err(MedrecError::Storage(StorageError::Timeout { backend, .. })) => {
//!         eprintln!("{} timed out", backend);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the medrec query engine
#[derive(Debug, Error)]
pub enum MedrecError {
    /// Record source errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Criteria validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure handed to whatever transport the caller uses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MedrecError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MedrecError::Storage(e) => e.error_code(),
            MedrecError::Config(_) => "CONFIG_ERROR",
            MedrecError::Validation(_) => "VALIDATION_ERROR",
            MedrecError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            MedrecError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Faults reported by a record source
///
/// The pipeline never retries or rewrites these; they reach the caller as-is
/// wrapped in [`MedrecError::Storage`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// Connection error
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    /// Reading records failed
    #[error("{backend} read error: {message}")]
    ReadFailed { backend: String, message: String },

    /// The backend did not answer in time
    #[error("{backend} timed out after {elapsed_ms}ms")]
    Timeout { backend: String, elapsed_ms: u64 },

    /// Backend not available
    #[error("Storage backend '{backend}' is unavailable")]
    Unavailable { backend: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::ConnectionError { .. } => "STORAGE_CONNECTION_ERROR",
            StorageError::ReadFailed { .. } => "STORAGE_READ_FAILED",
            StorageError::Timeout { .. } => "STORAGE_TIMEOUT",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by the criteria validation helper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Several fields failed validation
    #[error("Validation failed: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for MedrecError {
    fn from(err: std::io::Error) -> Self {
        MedrecError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for MedrecError {
    fn from(err: serde_yaml::Error) -> Self {
        MedrecError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error, keeping typed config errors when present
impl From<anyhow::Error> for MedrecError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ConfigError>() {
            Ok(config) => MedrecError::Config(config),
            Err(err) => MedrecError::Internal(format!("{:#}", err)),
        }
    }
}

/// A specialized Result type for medrec operations
pub type MedrecResult<T> = Result<T, MedrecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::ConnectionError {
            backend: "PostgreSQL".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("PostgreSQL"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_storage_error_passes_through_transparently() {
        let inner = StorageError::Timeout {
            backend: "records".to_string(),
            elapsed_ms: 1500,
        };
        let err: MedrecError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.error_code(), "STORAGE_TIMEOUT");
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "pageSize".to_string(),
                message: "must be greater than zero".to_string(),
            },
            FieldValidationError {
                field: "rank".to_string(),
                message: "min is greater than max".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("pageSize"));
        assert!(display.contains("rank"));
    }

    #[test]
    fn test_error_response_carries_field_details() {
        let err = MedrecError::Validation(ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "pageSize".to_string(),
                message: "must be greater than zero".to_string(),
            },
        ]));
        let response = err.to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::ParseError {
            file: Some("query.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'query.yaml': bad indent"
        );

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_from_anyhow_keeps_config_error() {
        let err = anyhow::Error::new(ConfigError::FileNotFound {
            path: "/etc/medrec.yaml".to_string(),
        });
        let converted: MedrecError = err.into();
        assert!(matches!(
            converted,
            MedrecError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MedrecError = io.into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
