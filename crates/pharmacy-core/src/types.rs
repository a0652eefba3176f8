//! # Domain Types
//!
//! The three record kinds the pharmacy keeps.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Medicine     │   │    Customer     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──┼─────────────────┼───│  medicine_id    │       │
//! │  │  name           │   │  id             │◄──│  customer_id    │       │
//! │  │  quantity       │   │  name           │   │  order_id       │       │
//! │  │  price (Money)  │   │  contact        │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Arrows are referential fields: plain integers, not foreign keys.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every id is assigned by whoever creates the record. Nothing here
//! generates ids or enforces their uniqueness.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Medicine
// =============================================================================

/// A medicine on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medicine {
    /// Caller-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units in stock. Non-negative by convention, not enforced.
    pub quantity: i64,

    /// Unit price.
    pub price: Money,
}

impl Medicine {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: Money) -> Self {
        Medicine {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Value of the units in stock (`price × quantity`), or `None` when
    /// it does not fit in [`Money`].
    #[inline]
    pub fn stock_value(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A pharmacy customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Free-form contact details (phone, email, address...).
    pub contact: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order of one medicine by one customer.
///
/// `customer_id` and `medicine_id` are expected to match existing records,
/// but they are stored as plain integers. Whether that expectation is
/// checked is decided by the order store's reference policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
}

impl Order {
    pub fn new(order_id: i64, customer_id: i64, medicine_id: i64, quantity: i64) -> Self {
        Order {
            order_id,
            customer_id,
            medicine_id,
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
