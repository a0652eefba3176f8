//! # Repository Module
//!
//! One store per record type.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  MedicineStore = Store<Medicine>    ── Medicine.txt                    │
//! │  CustomerStore = Store<Customer>    ── Customer.txt                    │
//! │  OrderStore    ─ wraps Store<Order> ── Order.txt                       │
//! │       │                                                                 │
//! │       │  reads identifiers() from the other two                        │
//! │       ▼                                                                 │
//! │  IdentifierSource (medicines, customers)                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The medicine and customer modules only teach [`Store`](crate::Store)
//! how their records look on disk. Orders add the pick-list and the
//! reference policy on top.

pub mod customer;
pub mod medicine;
pub mod order;

pub use customer::CustomerStore;
pub use medicine::MedicineStore;
pub use order::{OrderChoices, OrderStore};
