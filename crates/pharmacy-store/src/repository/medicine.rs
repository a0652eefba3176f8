//! # Medicine Store
//!
//! ## File Format
//! ```text
//! id,name,quantity,price
//! 1,Aspirin,50,5.00
//! 2,Ibuprofen,20,7.25
//! ```
//!
//! Prices are written with two decimals. Older files with `5.0`, `7` or
//! `1.0E7` read the same; extra decimals round to the nearest cent.

use pharmacy_core::validation::{
    parse_integer, parse_stored_price, validate_single_line, ValidationResult,
};
use pharmacy_core::{Medicine, Money};

use crate::record::Record;
use crate::store::Store;

/// The medicine store.
pub type MedicineStore = Store<Medicine>;

impl Record for Medicine {
    const ENTITY: &'static str = "Medicine";
    const FIELDS: &'static [&'static str] = &["id", "name", "quantity", "price"];

    fn identifier(&self) -> i64 {
        self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.quantity.to_string(),
            self.price.to_decimal_string(),
        ]
    }

    fn from_fields(fields: &[String]) -> ValidationResult<Self> {
        Ok(Medicine {
            id: parse_integer("id", &fields[0])?,
            name: fields[1].clone(),
            quantity: parse_integer("quantity", &fields[2])?,
            price: parse_stored_price("price", &fields[3])?,
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_single_line("name", &self.name)
    }
}

impl Store<Medicine> {
    /// First medicine with the given id.
    pub fn find(&self, id: i64) -> Option<&Medicine> {
        self.list().iter().find(|m| m.id == id)
    }

    /// Sum of price × quantity over every medicine, or `None` on overflow.
    pub fn total_stock_value(&self) -> Option<Money> {
        self.list()
            .iter()
            .try_fold(Money::zero(), |total, m| total.checked_add(m.stock_value()?))
    }
}
