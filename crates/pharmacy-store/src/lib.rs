//! # pharmacy-store: Flat-File Persistence for Pharmacy Records
//!
//! Medicines, customers and orders, each kept in memory and mirrored to
//! its own comma-delimited text file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pharmacy Data Flow                               │
//! │                                                                         │
//! │  pharmacy CLI (medicine add / order add / ...)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pharmacy-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Pharmacy    │    │  Repositories │    │    Codec     │  │   │
//! │  │   │ (pharmacy.rs) │    │ (medicine.rs) │    │  (codec.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ MedicineStore │───►│ encode_line  │  │   │
//! │  │   │ open()        │    │ CustomerStore │    │ decode_line  │  │   │
//! │  │   │ summary()     │    │ OrderStore    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/Medicine.txt   Customer.txt   Order.txt            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`] - Splitting and joining delimited lines
//! - [`record`] - How a record type maps onto a line
//! - [`store`] - Generic load / add / save
//! - [`repository`] - Medicine, customer and order stores
//! - [`pharmacy`] - The three stores opened together
//! - [`config`] - File locations and policies
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pharmacy_core::MedicineForm;
//! use pharmacy_store::{Pharmacy, StoreConfig};
//!
//! let mut pharmacy = Pharmacy::open(&StoreConfig::new("./data"))?;
//!
//! pharmacy
//!     .medicines_mut()
//!     .add_form(&MedicineForm::new("1", "Aspirin", "50", "5.00"))?;
//!
//! for medicine in pharmacy.medicines().list() {
//!     println!("{} {}", medicine.id, medicine.name);
//! }
//! # Ok::<(), pharmacy_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod config;
pub mod error;
pub mod pharmacy;
pub mod record;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{MalformedLinePolicy, ReferencePolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use pharmacy::{Pharmacy, Summary};
pub use record::Record;
pub use store::{IdentifierSource, LoadReport, MalformedLine, Store};

// Repository re-exports for convenience
pub use repository::customer::CustomerStore;
pub use repository::medicine::MedicineStore;
pub use repository::order::{OrderChoices, OrderStore};
