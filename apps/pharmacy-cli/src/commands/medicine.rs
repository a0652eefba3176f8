//! # Medicine Commands

use clap::{Args, Subcommand};
use pharmacy_core::{Medicine, MedicineForm};
use pharmacy_store::{MedicineStore, Pharmacy};
use serde::Serialize;
use tracing::info;

use crate::error::CliResult;
use crate::output::{json, OutputFormat, Table};

#[derive(Debug, Subcommand)]
pub enum MedicineAction {
    /// List every medicine in insertion order
    List,

    /// Add a medicine
    Add(AddMedicine),
}

#[derive(Debug, Args)]
pub struct AddMedicine {
    /// Medicine id (whole number)
    #[arg(long, allow_hyphen_values = true)]
    pub id: String,

    /// Medicine name
    #[arg(long)]
    pub name: String,

    /// Units in stock (whole number)
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Unit price, e.g. 2.50
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
}

impl AddMedicine {
    pub fn to_form(&self) -> MedicineForm {
        MedicineForm::new(&self.id, &self.name, &self.quantity, &self.price)
    }
}

/// Medicine as rendered in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct MedicineDto {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: String,
    pub price_cents: i64,
}

impl From<&Medicine> for MedicineDto {
    fn from(m: &Medicine) -> Self {
        MedicineDto {
            id: m.id,
            name: m.name.clone(),
            quantity: m.quantity,
            price: m.price.to_decimal_string(),
            price_cents: m.price.cents(),
        }
    }
}

pub fn run(
    pharmacy: &mut Pharmacy,
    action: MedicineAction,
    format: OutputFormat,
) -> CliResult<String> {
    match action {
        MedicineAction::List => list(pharmacy.medicines(), format),
        MedicineAction::Add(args) => add(pharmacy.medicines_mut(), &args, format),
    }
}

pub fn list(store: &MedicineStore, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let dtos: Vec<MedicineDto> = store.list().iter().map(MedicineDto::from).collect();
            json(&dtos)
        }
        OutputFormat::Text => {
            let mut table = Table::new(["ID", "NAME", "QUANTITY", "PRICE"]);
            for m in store.list() {
                table.row([
                    m.id.to_string(),
                    m.name.clone(),
                    m.quantity.to_string(),
                    m.price.to_string(),
                ]);
            }
            Ok(table.render("No medicines."))
        }
    }
}

pub fn add(
    store: &mut MedicineStore,
    args: &AddMedicine,
    format: OutputFormat,
) -> CliResult<String> {
    let medicine = store.add_form(&args.to_form())?;
    info!(id = medicine.id, name = %medicine.name, "Medicine added");

    match format {
        OutputFormat::Json => json(&MedicineDto::from(&medicine)),
        OutputFormat::Text => Ok(format!("Added medicine {} ({})", medicine.id, medicine.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pharmacy_store::MalformedLinePolicy;

    fn args(quantity: &str) -> AddMedicine {
        AddMedicine {
            id: "1".to_string(),
            name: "Aspirin".to_string(),
            quantity: quantity.to_string(),
            price: "5".to_string(),
        }
    }

    #[test]
    fn test_add_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Medicine.txt");
        let mut store = MedicineStore::open(path, MalformedLinePolicy::Skip).unwrap();

        let out = add(&mut store, &args("50"), OutputFormat::Text).unwrap();
        assert_eq!(out, "Added medicine 1 (Aspirin)");

        let out = list(&store, OutputFormat::Text).unwrap();
        assert_eq!(out, "ID  NAME     QUANTITY  PRICE\n1   Aspirin  50        $5.00");

        let out = list(&store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["price"], "5.00");
        assert_eq!(value[0]["price_cents"], 500);
    }

    #[test]
    fn test_bad_quantity_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Medicine.txt");
        let mut store = MedicineStore::open(path, MalformedLinePolicy::Skip).unwrap();

        let err = add(&mut store, &args("lots"), OutputFormat::Text).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("quantity"));
        assert!(store.is_empty());
    }
}
