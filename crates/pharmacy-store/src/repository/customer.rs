//! # Customer Store
//!
//! ```text
//! id,name,contact
//! 10,Jane Doe,555-0101
//! 11,John Roe,
//! ```

use pharmacy_core::validation::{parse_integer, validate_single_line, ValidationResult};
use pharmacy_core::Customer;

use crate::record::Record;
use crate::store::Store;

/// The customer store.
pub type CustomerStore = Store<Customer>;

impl Record for Customer {
    const ENTITY: &'static str = "Customer";
    const FIELDS: &'static [&'static str] = &["id", "name", "contact"];

    fn identifier(&self) -> i64 {
        self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.contact.clone()]
    }

    fn from_fields(fields: &[String]) -> ValidationResult<Self> {
        Ok(Customer {
            id: parse_integer("id", &fields[0])?,
            name: fields[1].clone(),
            contact: fields[2].clone(),
        })
    }

    fn validate(&self) -> ValidationResult<()> {
        validate_single_line("name", &self.name)?;
        validate_single_line("contact", &self.contact)
    }
}

impl Store<Customer> {
    /// First customer with the given id.
    pub fn find(&self, id: i64) -> Option<&Customer> {
        self.list().iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{from_line, to_line};

    #[test]
    fn test_line_format() {
        let jane = Customer::new(10, "Jane Doe", "555-0101");
        assert_eq!(to_line(&jane), "10,Jane Doe,555-0101");
        assert_eq!(from_line::<Customer>("10,Jane Doe,555-0101").unwrap(), jane);
    }

    #[test]
    fn test_empty_contact() {
        let john = Customer::new(11, "John Roe", "");
        assert_eq!(to_line(&john), "11,John Roe,");
        assert_eq!(from_line::<Customer>("11,John Roe,").unwrap(), john);
    }

    #[test]
    fn test_contact_with_comma() {
        let customer = Customer::new(12, "Ann Poe", "12 High St, Leeds");
        let line = to_line(&customer);
        assert_eq!(from_line::<Customer>(&line).unwrap(), customer);
    }

    #[test]
    fn test_multiline_contact_is_invalid() {
        assert!(Customer::new(13, "Ed", "line one\nline two")
            .validate()
            .is_err());
    }
}
