//! # Order Commands
//!
//! `order choices` prints the same pick-lists a form would offer: the ids
//! currently in the customer and medicine stores.

use clap::{Args, Subcommand};
use pharmacy_core::OrderForm;
use pharmacy_store::{OrderChoices, Pharmacy};
use tracing::info;

use crate::error::CliResult;
use crate::output::{json, OutputFormat, Table};

#[derive(Debug, Subcommand)]
pub enum OrderAction {
    /// List every order in insertion order
    List,

    /// Show the customer and medicine ids an order can use
    Choices,

    /// Place an order
    Add(AddOrder),
}

#[derive(Debug, Args)]
pub struct AddOrder {
    /// Order id (whole number)
    #[arg(long, allow_hyphen_values = true)]
    pub order_id: String,

    /// Customer id, see `order choices`
    #[arg(long, allow_hyphen_values = true)]
    pub customer_id: String,

    /// Medicine id, see `order choices`
    #[arg(long, allow_hyphen_values = true)]
    pub medicine_id: String,

    /// Units ordered (whole number)
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Reject ids that aren't in the customer or medicine store
    #[arg(long)]
    pub enforce_references: bool,
}

impl AddOrder {
    pub fn to_form(&self) -> OrderForm {
        OrderForm::new(&self.order_id, &self.customer_id, &self.medicine_id, &self.quantity)
    }
}

pub fn run(
    pharmacy: &mut Pharmacy,
    action: OrderAction,
    format: OutputFormat,
) -> CliResult<String> {
    match action {
        OrderAction::List => list(pharmacy, format),
        OrderAction::Choices => choices(&pharmacy.order_choices(), format),
        OrderAction::Add(args) => add(pharmacy, &args, format),
    }
}

pub fn list(pharmacy: &Pharmacy, format: OutputFormat) -> CliResult<String> {
    let orders = pharmacy.orders().list();

    match format {
        OutputFormat::Json => json(orders),
        OutputFormat::Text => {
            let mut table = Table::new(["ORDER", "CUSTOMER", "MEDICINE", "QUANTITY"]);
            for o in orders {
                let customer = pharmacy.customers().find(o.customer_id).map(|c| c.name.as_str());
                let medicine = pharmacy.medicines().find(o.medicine_id).map(|m| m.name.as_str());
                table.row([
                    o.order_id.to_string(),
                    labelled(o.customer_id, customer),
                    labelled(o.medicine_id, medicine),
                    o.quantity.to_string(),
                ]);
            }
            Ok(table.render("No orders."))
        }
    }
}

fn labelled(id: i64, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} {}", id, name),
        None => format!("{} (unknown)", id),
    }
}

pub fn choices(choices: &OrderChoices, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => json(choices),
        OutputFormat::Text => Ok(format!(
            "Customers: {}\nMedicines: {}",
            joined(&choices.customer_ids),
            joined(&choices.medicine_ids)
        )),
    }
}

fn joined(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.join(", ")
    }
}

pub fn add(pharmacy: &mut Pharmacy, args: &AddOrder, format: OutputFormat) -> CliResult<String> {
    let order = pharmacy.place_order_form(&args.to_form())?;
    info!(
        order_id = order.order_id,
        customer_id = order.customer_id,
        medicine_id = order.medicine_id,
        "Order placed"
    );

    match format {
        OutputFormat::Json => json(&order),
        OutputFormat::Text => Ok(format!(
            "Placed order {}: {} x medicine {} for customer {}",
            order.order_id, order.quantity, order.medicine_id, order.customer_id
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pharmacy_core::{Customer, Medicine, Money};
    use pharmacy_store::{ReferencePolicy, StoreConfig};

    fn args(customer_id: &str) -> AddOrder {
        AddOrder {
            order_id: "100".to_string(),
            customer_id: customer_id.to_string(),
            medicine_id: "1".to_string(),
            quantity: "3".to_string(),
            enforce_references: false,
        }
    }

    fn pharmacy(dir: &tempfile::TempDir, references: ReferencePolicy) -> Pharmacy {
        let config = StoreConfig::new(dir.path()).references(references);
        let mut pharmacy = Pharmacy::open(&config).unwrap();
        pharmacy
            .medicines_mut()
            .add(Medicine::new(1, "Aspirin", 50, Money::from_cents(500)))
            .unwrap();
        pharmacy
            .customers_mut()
            .add(Customer::new(10, "Jane Doe", "555-0101"))
            .unwrap();
        pharmacy
    }

    #[test]
    fn test_choices_text() {
        let dir = tempfile::tempdir().unwrap();
        let pharmacy = pharmacy(&dir, ReferencePolicy::Unchecked);

        assert_eq!(
            choices(&pharmacy.order_choices(), OutputFormat::Text).unwrap(),
            "Customers: 10\nMedicines: 1"
        );
        assert_eq!(
            choices(&OrderChoices::default(), OutputFormat::Text).unwrap(),
            "Customers: (none)\nMedicines: (none)"
        );
    }

    #[test]
    fn test_add_and_list_with_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut pharmacy = pharmacy(&dir, ReferencePolicy::Unchecked);

        add(&mut pharmacy, &args("10"), OutputFormat::Text).unwrap();
        add(&mut pharmacy, &args("99"), OutputFormat::Text).unwrap();

        let out = list(&pharmacy, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("10 Jane Doe"));
        assert!(lines[2].contains("99 (unknown)"));
    }

    #[test]
    fn test_enforced_dangling_customer() {
        let dir = tempfile::tempdir().unwrap();
        let mut pharmacy = pharmacy(&dir, ReferencePolicy::Enforce);

        let err = add(&mut pharmacy, &args("99"), OutputFormat::Text).unwrap_err();

        assert_eq!(err.code, ErrorCode::UnknownReference);
        assert_eq!(err.exit_code(), 2);
        assert!(pharmacy.orders().is_empty());
    }
}
