//! # pharmacy-core: Pure Domain Logic for Pharmacy Records
//!
//! This crate holds the record types the rest of the workspace moves around,
//! plus the rules for turning raw form text into those records.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pharmacy Records Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation (CLI today, any UI later)            │   │
//! │  │     collects raw text  ──►  MedicineForm / CustomerForm / ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ form.parse()                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pharmacy-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   forms   │  │ validation│  │   │
//! │  │   │ Medicine  │  │   Money   │  │ raw text  │  │   rules   │  │   │
//! │  │   │ Customer  │  │  (cents)  │  │  → typed  │  │  checks   │  │   │
//! │  │   │  Order    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               pharmacy-store (Persistence Layer)                │   │
//! │  │        Medicine.txt, Customer.txt, Order.txt, one per store     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (Medicine, Customer, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`form`] - Raw text input forms and their parsers
//! - [`error`] - Domain error types
//! - [`validation`] - Field parsing and validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmacy_core::form::MedicineForm;
//!
//! let form = MedicineForm::new("12", "Paracetamol", "100", "2.5");
//! let medicine = form.parse().unwrap();
//!
//! assert_eq!(medicine.id, 12);
//! assert_eq!(medicine.price.cents(), 250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use form::{CustomerForm, Form, MedicineForm, OrderForm};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest name accepted from an input form (medicines and customers).
pub const MAX_NAME_LEN: usize = 200;

/// Longest customer contact accepted from an input form.
pub const MAX_CONTACT_LEN: usize = 100;
