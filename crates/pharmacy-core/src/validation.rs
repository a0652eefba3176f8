//! # Validation Module
//!
//! Field parsing and validation rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Collects raw text, offers identifier pick-lists                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Forms (form.rs, using THIS MODULE)                           │
//! │  ├── Numeric parsing (id, quantity, price)                             │
//! │  └── Required / length checks on names                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Record rules (every record entering a store)                 │
//! │  └── Text fields stay on one line                                      │
//! │                                                                         │
//! │  A failure at any layer leaves every store untouched                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, MoneyParseError, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a whole number (ids, quantities).
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::parse_integer;
///
/// assert_eq!(parse_integer("quantity", " 50 ").unwrap(), 50);
/// assert!(parse_integer("quantity", "fifty").is_err());
/// assert!(parse_integer("quantity", "").is_err());
/// ```
pub fn parse_integer(field: &str, text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: field.to_string(),
            value: text.to_string(),
        })
}

/// Parses a decimal price into [`Money`].
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::parse_price;
///
/// assert_eq!(parse_price("price", "2.5").unwrap().cents(), 250);
/// assert!(parse_price("price", "cheap").is_err());
/// ```
pub fn parse_price(field: &str, text: &str) -> ValidationResult<Money> {
    price_with(field, text, Money::parse_decimal)
}

/// Parses a price read from a record file.
///
/// Unlike [`parse_price`], exponent notation (`1.0E7`) is accepted and
/// extra decimals are rounded to the cent, see [`Money::parse_stored`].
pub fn parse_stored_price(field: &str, text: &str) -> ValidationResult<Money> {
    price_with(field, text, Money::parse_stored)
}

fn price_with(
    field: &str,
    text: &str,
    parse: fn(&str) -> Result<Money, MoneyParseError>,
) -> ValidationResult<Money> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    parse(text).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Text Validators
// =============================================================================

/// Validates and trims a required text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `max` characters
/// - Must stay on a single line
pub fn validate_required_text(field: &str, text: &str, max: usize) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    validate_optional_text(field, text, max)
}

/// Validates and trims a text field that may be empty.
pub fn validate_optional_text(field: &str, text: &str, max: usize) -> ValidationResult<String> {
    let text = text.trim();

    if text.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    validate_single_line(field, text)?;
    Ok(text.to_string())
}

/// Rejects text containing a line break.
///
/// One record is one line in its backing file, so this rule applies to
/// every record a store accepts, not just to form input.
pub fn validate_single_line(field: &str, text: &str) -> ValidationResult<()> {
    if text.contains(['\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain line breaks".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Reference Checks
// =============================================================================

/// Checks that `id` appears in an identifier enumeration.
///
/// Identifiers are compared in their string form, exactly as they are
/// offered to the user for selection.
///
/// ## Example
/// ```rust
/// use pharmacy_core::validation::check_reference;
///
/// let customers = vec!["10".to_string(), "11".to_string()];
/// assert!(check_reference("Customer", 10, &customers).is_ok());
/// assert!(check_reference("Customer", 12, &customers).is_err());
/// ```
pub fn check_reference(entity: &str, id: i64, identifiers: &[String]) -> CoreResult<()> {
    let wanted = id.to_string();

    if identifiers.iter().any(|known| *known == wanted) {
        Ok(())
    } else {
        Err(CoreError::UnknownReference {
            entity: entity.to_string(),
            id,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
