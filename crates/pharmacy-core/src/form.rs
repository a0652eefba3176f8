//! # Input Forms
//!
//! Raw text exactly as a user typed it, and the parsers that turn it into
//! records.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Add Medicine                                                           │
//! │                                                                         │
//! │  id: "12"  name: "Paracetamol"  quantity: "100"  price: "2.5"          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MedicineForm::parse() ← THIS MODULE                                   │
//! │       │                                                                 │
//! │       ├── quantity = "ten"? → ValidationError (form shown again)       │
//! │       │                                                                 │
//! │       └── OK → Medicine { id: 12, ..., price: 250 cents } → store      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are checked in the order they appear on the form, so the error
//! names the first bad field.

use serde::{Deserialize, Serialize};

use crate::types::{Customer, Medicine, Order};
use crate::validation::{
    parse_integer, parse_price, validate_optional_text, validate_required_text, ValidationResult,
};
use crate::{MAX_CONTACT_LEN, MAX_NAME_LEN};

// =============================================================================
// Form Trait
// =============================================================================

/// Raw input that parses into one record type.
pub trait Form {
    type Output;

    /// Parses the raw text, naming the first invalid field on failure.
    fn parse(&self) -> ValidationResult<Self::Output>;
}

// =============================================================================
// Medicine Form
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineForm {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl MedicineForm {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        MedicineForm {
            id: id.into(),
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    pub fn parse(&self) -> ValidationResult<Medicine> {
        Ok(Medicine {
            id: parse_integer("id", &self.id)?,
            name: validate_required_text("name", &self.name, MAX_NAME_LEN)?,
            quantity: parse_integer("quantity", &self.quantity)?,
            price: parse_price("price", &self.price)?,
        })
    }
}

impl Form for MedicineForm {
    type Output = Medicine;

    fn parse(&self) -> ValidationResult<Medicine> {
        MedicineForm::parse(self)
    }
}

// =============================================================================
// Customer Form
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub id: String,
    pub name: String,
    pub contact: String,
}

impl CustomerForm {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        CustomerForm {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    pub fn parse(&self) -> ValidationResult<Customer> {
        Ok(Customer {
            id: parse_integer("id", &self.id)?,
            name: validate_required_text("name", &self.name, MAX_NAME_LEN)?,
            contact: validate_optional_text("contact", &self.contact, MAX_CONTACT_LEN)?,
        })
    }
}

impl Form for CustomerForm {
    type Output = Customer;

    fn parse(&self) -> ValidationResult<Customer> {
        CustomerForm::parse(self)
    }
}

// =============================================================================
// Order Form
// =============================================================================

/// Order input. `customer_id` and `medicine_id` normally come from the
/// identifier pick-lists, but they arrive here as text all the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub order_id: String,
    pub customer_id: String,
    pub medicine_id: String,
    pub quantity: String,
}

impl OrderForm {
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        medicine_id: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        OrderForm {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            medicine_id: medicine_id.into(),
            quantity: quantity.into(),
        }
    }

    pub fn parse(&self) -> ValidationResult<Order> {
        Ok(Order {
            order_id: parse_integer("order_id", &self.order_id)?,
            customer_id: parse_integer("customer_id", &self.customer_id)?,
            medicine_id: parse_integer("medicine_id", &self.medicine_id)?,
            quantity: parse_integer("quantity", &self.quantity)?,
        })
    }
}

impl Form for OrderForm {
    type Output = Order;

    fn parse(&self) -> ValidationResult<Order> {
        OrderForm::parse(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
