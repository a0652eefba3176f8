//! # CLI Error Types
//!
//! What the user sees when a command fails, and the exit code that goes
//! with it.
//!
//! ## JSON Form
//! With `--format json` a failure is printed to stderr as:
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "Invalid input: quantity must be a whole number, got 'lots'"
//! }
//! ```
//!
//! ## Exit Codes
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! | 0    | Success                                          |
//! | 1    | Storage, malformed data or configuration failure |
//! | 2    | Input rejected (validation, unknown reference)   |

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use pharmacy_store::StoreError;

/// Error returned from a command.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field failed validation
    ValidationError,

    /// An order named a customer or medicine that doesn't exist
    UnknownReference,

    /// A backing file has a line that isn't a record
    MalformedData,

    /// Reading or writing a backing file failed
    StorageError,

    /// Configuration couldn't be resolved or read
    ConfigError,
}

impl ErrorCode {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::ValidationError | ErrorCode::UnknownReference => 2,
            ErrorCode::MalformedData | ErrorCode::StorageError | ErrorCode::ConfigError => 1,
        }
    }
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ConfigError, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }

    /// Renders the error as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::Validation(_) => ErrorCode::ValidationError,
            StoreError::DanglingReference { .. } => ErrorCode::UnknownReference,
            StoreError::Malformed { .. } => ErrorCode::MalformedData,
            StoreError::Io { .. } => ErrorCode::StorageError,
            StoreError::Persist { .. } => {
                error!(error = %err, "Record accepted but not saved");
                ErrorCode::StorageError
            }
            StoreError::Config { .. } => ErrorCode::ConfigError,
        };

        CliError::new(code, err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::ValidationError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let invalid: CliError = StoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(invalid.code, ErrorCode::ValidationError);
        assert_eq!(invalid.exit_code(), 2);

        let dangling: CliError = StoreError::dangling("Customer", 7).into();
        assert_eq!(dangling.code, ErrorCode::UnknownReference);
        assert_eq!(dangling.exit_code(), 2);

        let persist: CliError = StoreError::Persist {
            path: PathBuf::from("Order.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(persist.code, ErrorCode::StorageError);
        assert_eq!(persist.exit_code(), 1);
    }

    #[test]
    fn test_json_shape() {
        let err = CliError::config("no data directory");
        let json: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();

        assert_eq!(json["code"], "CONFIG_ERROR");
        assert_eq!(json["message"], "no data directory");
    }
}
