//! # Customer Commands

use clap::{Args, Subcommand};
use pharmacy_core::CustomerForm;
use pharmacy_store::{CustomerStore, Pharmacy};
use tracing::info;

use crate::error::CliResult;
use crate::output::{json, OutputFormat, Table};

#[derive(Debug, Subcommand)]
pub enum CustomerAction {
    /// List every customer in insertion order
    List,

    /// Add a customer
    Add(AddCustomer),
}

#[derive(Debug, Args)]
pub struct AddCustomer {
    /// Customer id (whole number)
    #[arg(long, allow_hyphen_values = true)]
    pub id: String,

    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Phone number, email or address
    #[arg(long, default_value = "")]
    pub contact: String,
}

impl AddCustomer {
    pub fn to_form(&self) -> CustomerForm {
        CustomerForm::new(&self.id, &self.name, &self.contact)
    }
}

pub fn run(
    pharmacy: &mut Pharmacy,
    action: CustomerAction,
    format: OutputFormat,
) -> CliResult<String> {
    match action {
        CustomerAction::List => list(pharmacy.customers(), format),
        CustomerAction::Add(args) => add(pharmacy.customers_mut(), &args, format),
    }
}

pub fn list(store: &CustomerStore, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => json(store.list()),
        OutputFormat::Text => {
            let mut table = Table::new(["ID", "NAME", "CONTACT"]);
            for c in store.list() {
                table.row([c.id.to_string(), c.name.clone(), c.contact.clone()]);
            }
            Ok(table.render("No customers."))
        }
    }
}

pub fn add(
    store: &mut CustomerStore,
    args: &AddCustomer,
    format: OutputFormat,
) -> CliResult<String> {
    let customer = store.add_form(&args.to_form())?;
    info!(id = customer.id, "Customer added");

    match format {
        OutputFormat::Json => json(&customer),
        OutputFormat::Text => Ok(format!("Added customer {} ({})", customer.id, customer.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pharmacy_store::MalformedLinePolicy;

    fn open(dir: &tempfile::TempDir) -> CustomerStore {
        CustomerStore::open(dir.path().join("Customer.txt"), MalformedLinePolicy::Skip).unwrap()
    }

    #[test]
    fn test_add_and_list_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open(&dir);

        let args = AddCustomer {
            id: "10".to_string(),
            name: "Jane Doe".to_string(),
            contact: "555-0101".to_string(),
        };
        add(&mut store, &args, OutputFormat::Text).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&list(&store, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value[0]["id"], 10);
        assert_eq!(value[0]["name"], "Jane Doe");
        assert_eq!(value[0]["contact"], "555-0101");
    }

    #[test]
    fn test_blank_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open(&dir);

        let args = AddCustomer {
            id: "10".to_string(),
            name: "   ".to_string(),
            contact: String::new(),
        };
        let err = add(&mut store, &args, OutputFormat::Text).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list(&store, OutputFormat::Text).unwrap(), "No customers.");
    }
}
