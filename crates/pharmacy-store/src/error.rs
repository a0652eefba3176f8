//! # Store Error Types
//!
//! Error types for load, save and add operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / ValidationError / CoreError                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path, line and entity context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Code + message for the user                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Survives Each Error
//! | Variant             | In-memory set           | Backing file        |
//! |---------------------|-------------------------|---------------------|
//! | `Validation`        | unchanged               | untouched           |
//! | `DanglingReference` | unchanged               | untouched           |
//! | `Malformed`         | unchanged (abort load)  | untouched           |
//! | `Io`                | unchanged               | untouched           |
//! | `Persist`           | **already mutated**     | previous contents   |

use std::io;
use std::path::PathBuf;

use pharmacy_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record or form failed validation before anything was mutated.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// An order names a customer or medicine that isn't in its store.
    ///
    /// ## When This Occurs
    /// Only under `ReferencePolicy::Enforce`.
    #[error("Order references unknown {entity} {id}")]
    DanglingReference { entity: String, id: i64 },

    /// A line in a backing file couldn't be read as a record.
    ///
    /// ## When This Occurs
    /// Only under `MalformedLinePolicy::Abort`; the default policy skips
    /// the line and records it in the load report instead.
    #[error("{}:{line}: malformed record: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Reading a backing file failed for a reason other than it not
    /// existing.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a backing file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Permission denied
    /// - Data directory removed while running
    ///
    /// Any record added by the failing call is still in memory; it may
    /// not be on disk.
    #[error("Failed to save {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A store configuration file couldn't be read or parsed.
    #[error("Invalid store configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl StoreError {
    /// Creates a DanglingReference error.
    pub fn dangling(entity: impl Into<String>, id: i64) -> Self {
        StoreError::DanglingReference {
            entity: entity.into(),
            id,
        }
    }

    /// True when the in-memory set may be ahead of the backing file.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, StoreError::Persist { .. })
    }

    /// True when the caller's input was rejected and nothing changed.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            StoreError::Validation(_) | StoreError::DanglingReference { .. }
        )
    }
}

/// Convert domain errors to StoreError.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownReference { entity, id } => {
                StoreError::DanglingReference { entity, id }
            }
            CoreError::Validation(e) => StoreError::Validation(e),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Malformed {
            path: PathBuf::from("data/Medicine.txt"),
            line: 3,
            reason: "expected 4 fields, found 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data/Medicine.txt:3: malformed record: expected 4 fields, found 2"
        );

        assert_eq!(
            StoreError::dangling("Customer", 7).to_string(),
            "Order references unknown Customer 7"
        );
    }

    #[test]
    fn test_classification() {
        let persist = StoreError::Persist {
            path: PathBuf::from("Order.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(persist.is_persistence_failure());
        assert!(!persist.is_rejected_input());

        let invalid: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(invalid.is_rejected_input());
        assert!(!invalid.is_persistence_failure());
    }

    #[test]
    fn test_core_error_conversion() {
        let err: StoreError = CoreError::UnknownReference {
            entity: "Medicine".to_string(),
            id: 9,
        }
        .into();
        assert!(matches!(err, StoreError::DanglingReference { id: 9, .. }));
    }
}
