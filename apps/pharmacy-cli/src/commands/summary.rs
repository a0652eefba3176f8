//! # Summary Command

use pharmacy_store::{Pharmacy, Summary};
use serde::Serialize;

use crate::error::CliResult;
use crate::output::{json, OutputFormat};

#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    pub medicines: usize,
    pub customers: usize,
    pub orders: usize,
    /// `null` when the total overflows.
    pub stock_value: Option<String>,
    pub stock_value_cents: Option<i64>,
    pub skipped_lines: usize,
}

impl SummaryDto {
    fn new(summary: &Summary, skipped_lines: usize) -> Self {
        SummaryDto {
            medicines: summary.medicines,
            customers: summary.customers,
            orders: summary.orders,
            stock_value: summary.stock_value.map(|v| v.to_decimal_string()),
            stock_value_cents: summary.stock_value.map(|v| v.cents()),
            skipped_lines,
        }
    }
}

pub fn run(pharmacy: &Pharmacy, format: OutputFormat) -> CliResult<String> {
    let summary = pharmacy.summary();
    let skipped = pharmacy.skipped_lines();

    match format {
        OutputFormat::Json => json(&SummaryDto::new(&summary, skipped)),
        OutputFormat::Text => {
            let stock_value = summary
                .stock_value
                .map_or_else(|| "too large to compute".to_string(), |v| v.to_string());
            let mut out = format!(
                "Data directory: {}\n\
                 Medicines:      {}\n\
                 Customers:      {}\n\
                 Orders:         {}\n\
                 Stock value:    {}",
                pharmacy.config().data_dir.display(),
                summary.medicines,
                summary.customers,
                summary.orders,
                stock_value
            );
            if skipped > 0 {
                out.push_str(&format!("\nSkipped lines:  {}", skipped));
            }
            Ok(out)
        }
    }
}
