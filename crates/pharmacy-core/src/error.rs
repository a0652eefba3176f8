//! # Error Types
//!
//! Domain-specific error types for pharmacy-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pharmacy-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Field input failures                           │
//! │  └── MoneyParseError  - Decimal price text that isn't money            │
//! │                                                                         │
//! │  pharmacy-store errors (separate crate)                                │
//! │  └── StoreError       - Load / save / reference failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → CliError → terminal              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, entity)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order names a customer or medicine id that doesn't exist.
    ///
    /// ## When This Occurs
    /// - Reference checking is switched on and the caller typed an id
    ///   instead of picking one from the identifier list
    #[error("{entity} {id} does not exist")]
    UnknownReference { entity: String, id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form text or a record field doesn't meet the
/// rules. They are raised before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field should be a whole number and isn't.
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: String, value: String },

    /// Invalid format (e.g., a price with three decimals, a line break).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A record line has the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

impl ValidationError {
    /// Returns the name of the offending field, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotAnInteger { field, .. }
            | ValidationError::InvalidFormat { field, .. } => Some(field),
            ValidationError::FieldCount { .. } => None,
        }
    }
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Reasons decimal text can't be read as [`Money`](crate::Money).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must contain only digits and one decimal point")]
    InvalidCharacter,

    #[error("amount has more than two decimal places")]
    TooPrecise,

    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
