//! # Seed Data Generator
//!
//! Fills a data directory with demo medicines, customers and orders.
//!
//! ## Usage
//! ```bash
//! # Seed ./data with 40 medicines (default)
//! cargo run -p pharmacy-store --bin seed
//!
//! # Custom amount and directory
//! cargo run -p pharmacy-store --bin seed -- --count 100 --data-dir /tmp/pharmacy
//! ```
//!
//! ## Generated Records
//! - Medicines: `{name} {strength}`, ids from 1, prices $1.99 - $9.98
//! - Customers: one per name below, ids from 1000
//! - Orders: one per customer, ids from 5000, always pointing at real ids

use std::env;

use pharmacy_core::{Customer, Medicine, Money, Order};
use pharmacy_store::{Pharmacy, StoreConfig};

/// Base medicine names
const MEDICINES: &[&str] = &[
    "Aspirin",
    "Ibuprofen",
    "Paracetamol",
    "Amoxicillin",
    "Cetirizine",
    "Loratadine",
    "Omeprazole",
    "Metformin",
    "Atorvastatin",
    "Salbutamol",
];

/// Strength variants with a price addon in cents
const STRENGTHS: &[(&str, i64)] = &[("100mg", 0), ("250mg", 75), ("500mg", 150), ("1g", 300)];

const CUSTOMERS: &[(&str, &str)] = &[
    ("Jane Doe", "555-0101"),
    ("John Roe", "555-0102"),
    ("Ann Poe", "ann@example.com"),
    ("Raj Patel", "555-0104"),
    ("Mei Chen", ""),
    ("Olu Ade", "555-0106"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut data_dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args.get(i + 1).map(String::as_str).unwrap_or("");
                count = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Invalid --count value '{}': expected a whole number", value);
                        eprintln!("Usage: seed [--count <N>] [--data-dir <DIR>]");
                        return Err(format!("invalid --count value '{}'", value).into());
                    }
                };
                i += 1;
            }
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pharmacy Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>        Number of medicines to generate (default: 40)");
                println!("  -d, --data-dir <DIR>   Data directory (default: ./data)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Pharmacy Seed Data Generator");
    println!("============================");
    println!("Data directory: {}", data_dir);
    println!("Medicines: {}", count);
    println!();

    let mut pharmacy = Pharmacy::open(&StoreConfig::new(&data_dir))?;

    let existing = pharmacy.summary();
    if existing.medicines + existing.customers + existing.orders > 0 {
        println!(
            "⚠ Data directory already has {} medicines, {} customers, {} orders",
            existing.medicines, existing.customers, existing.orders
        );
        println!("  Skipping seed to avoid duplicate ids.");
        println!("  Delete the .txt files to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    let medicines: Vec<Medicine> = MEDICINES
        .iter()
        .flat_map(|name| STRENGTHS.iter().map(move |strength| (*name, *strength)))
        .take(count)
        .enumerate()
        .map(|(seed, (name, (strength, addon)))| generate_medicine(seed, name, strength, addon))
        .collect();

    for medicine in medicines {
        if let Err(e) = pharmacy.medicines_mut().add(medicine) {
            eprintln!("Failed to add medicine: {}", e);
        }
    }
    println!("✓ Generated {} medicines", pharmacy.medicines().len());

    for (seed, (name, contact)) in CUSTOMERS.iter().enumerate() {
        let customer = Customer::new(1000 + seed as i64, *name, *contact);
        if let Err(e) = pharmacy.customers_mut().add(customer) {
            eprintln!("Failed to add customer {}: {}", name, e);
        }
    }
    println!("✓ Generated {} customers", pharmacy.customers().len());

    let choices = pharmacy.order_choices();
    let medicine_ids: Vec<i64> = pharmacy.medicines().list().iter().map(|m| m.id).collect();
    let customer_ids: Vec<i64> = pharmacy.customers().list().iter().map(|c| c.id).collect();

    if !choices.is_incomplete() {
        for (seed, customer_id) in customer_ids.iter().enumerate() {
            let medicine_id = medicine_ids[(seed * 7) % medicine_ids.len()];
            let quantity = 1 + (seed % 4) as i64;
            let order = Order::new(5000 + seed as i64, *customer_id, medicine_id, quantity);
            if let Err(e) = pharmacy.place_order(order) {
                eprintln!("Failed to place order: {}", e);
            }
        }
    }
    println!("✓ Generated {} orders", pharmacy.orders().len());

    let summary = pharmacy.summary();
    println!();
    println!("✓ Seed complete in {:?}", start.elapsed());
    match summary.stock_value {
        Some(value) => println!("  Stock value: {}", value),
        None => println!("  Stock value: too large to compute"),
    }

    Ok(())
}

/// Generates one medicine with a deterministic price and quantity.
fn generate_medicine(seed: usize, name: &str, strength: &str, price_addon: i64) -> Medicine {
    // $1.99 - $9.98 plus the strength addon
    let base_price = 199 + ((seed * 17) % 800) as i64;
    let quantity = (seed % 101) as i64;

    Medicine::new(
        seed as i64 + 1,
        format!("{} {}", name, strength),
        quantity,
        Money::from_cents(base_price + price_addon),
    )
}
