//! # Record Trait
//!
//! How one record type maps onto one line of its backing file.
//!
//! ```text
//! Medicine { id: 12, name: "Paracetamol", quantity: 100, price: 250¢ }
//!      │  to_fields()                         ▲  from_fields()
//!      ▼                                      │
//! ["12", "Paracetamol", "100", "2.50"]  ──────┘
//!      │  codec::encode_line()                ▲  codec::decode_line()
//!      ▼                                      │
//! 12,Paracetamol,100,2.50  ───────────────────┘
//! ```

use std::fmt;

use pharmacy_core::validation::ValidationResult;
use pharmacy_core::ValidationError;

use crate::codec;

/// A record type that a [`Store`](crate::Store) can own.
pub trait Record: Clone + fmt::Debug {
    /// Entity name used in logs and errors ("Medicine", "Customer", ...).
    const ENTITY: &'static str;

    /// Field names, in file order.
    const FIELDS: &'static [&'static str];

    /// The caller-assigned identifier.
    fn identifier(&self) -> i64;

    /// Field values as text, in [`Record::FIELDS`] order.
    fn to_fields(&self) -> Vec<String>;

    /// Builds a record from field text read from a file.
    ///
    /// Callers pass exactly `FIELDS.len()` fields; see [`check_field_count`].
    fn from_fields(fields: &[String]) -> ValidationResult<Self>;

    /// Rules every record must satisfy before a store accepts it.
    fn validate(&self) -> ValidationResult<()>;
}

/// Fails unless `fields` has exactly as many entries as `R` expects.
pub fn check_field_count<R: Record>(fields: &[String]) -> ValidationResult<()> {
    if fields.len() != R::FIELDS.len() {
        return Err(ValidationError::FieldCount {
            expected: R::FIELDS.len(),
            found: fields.len(),
        });
    }
    Ok(())
}

/// Serialises one record as a line (no trailing newline).
pub fn to_line<R: Record>(record: &R) -> String {
    codec::encode_line(&record.to_fields())
}

/// Parses one line into a record, describing the problem on failure.
pub fn from_line<R: Record>(line: &str) -> Result<R, String> {
    let fields = codec::decode_line(line).map_err(|e| e.to_string())?;
    check_field_count::<R>(&fields).map_err(|e| e.to_string())?;

    let record = R::from_fields(&fields).map_err(|e| e.to_string())?;
    record.validate().map_err(|e| e.to_string())?;
    Ok(record)
}
