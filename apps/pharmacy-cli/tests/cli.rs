//! Drives whole commands through `pharmacy_cli::run`.

use std::fs;
use std::path::Path;

use clap::Parser;
use pharmacy_cli::{run, Cli, CliResult, ErrorCode};
use tempfile::TempDir;

fn pharmacy(data_dir: &Path, args: &[&str]) -> CliResult<String> {
    let mut argv = vec!["pharmacy", "--data-dir", data_dir.to_str().unwrap()];
    argv.extend_from_slice(args);
    run(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_full_session() {
    let dir = TempDir::new().unwrap();
    let data = dir.path();

    pharmacy(
        data,
        &[
            "medicine", "add", "--id", "1", "--name", "Aspirin", "--quantity", "50", "--price",
            "5.0",
        ],
    )
    .unwrap();
    pharmacy(
        data,
        &["customer", "add", "--id", "10", "--name", "Jane Doe", "--contact", "555-0101"],
    )
    .unwrap();

    let choices = pharmacy(data, &["order", "choices"]).unwrap();
    assert_eq!(choices, "Customers: 10\nMedicines: 1");

    let placed = pharmacy(
        data,
        &[
            "order", "add", "--order-id", "100", "--customer-id", "10", "--medicine-id", "1",
            "--quantity", "3", "--enforce-references",
        ],
    )
    .unwrap();
    assert_eq!(placed, "Placed order 100: 3 x medicine 1 for customer 10");

    assert_eq!(fs::read_to_string(data.join("Medicine.txt")).unwrap(), "1,Aspirin,50,5.00\n");
    assert_eq!(fs::read_to_string(data.join("Customer.txt")).unwrap(), "10,Jane Doe,555-0101\n");
    assert_eq!(fs::read_to_string(data.join("Order.txt")).unwrap(), "100,10,1,3\n");

    let summary = pharmacy(data, &["summary", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(value["orders"], 1);
    assert_eq!(value["stock_value"], "250.00");
}

#[test]
fn test_rejected_input_exits_with_two() {
    let dir = TempDir::new().unwrap();

    let err = pharmacy(
        dir.path(),
        &[
            "medicine", "add", "--id", "1", "--name", "Aspirin", "--quantity", "fifty", "--price",
            "5",
        ],
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(err.exit_code(), 2);
    assert!(!dir.path().join("Medicine.txt").exists());

    let err = pharmacy(
        dir.path(),
        &[
            "order", "add", "--order-id", "1", "--customer-id", "5", "--medicine-id", "5",
            "--quantity", "1", "--enforce-references",
        ],
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownReference);
}

#[test]
fn test_unchecked_order_by_default() {
    let dir = TempDir::new().unwrap();

    pharmacy(
        dir.path(),
        &[
            "order", "add", "--order-id", "1", "--customer-id", "5", "--medicine-id", "5",
            "--quantity", "1",
        ],
    )
    .unwrap();

    let out = pharmacy(dir.path(), &["order", "list"]).unwrap();
    assert!(out.contains("5 (unknown)"));
}

#[test]
fn test_storage_failure_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "a file, not a directory").unwrap();

    let err = pharmacy(&blocked, &["customer", "list"]).unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_abort_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("pharmacy.toml");
    fs::write(&config, "malformed_lines = \"abort\"\n").unwrap();
    fs::write(dir.path().join("Order.txt"), "100,10,1,3\nnot an order\n").unwrap();

    let argv = [
        "pharmacy",
        "--config",
        config.to_str().unwrap(),
        "--data-dir",
        dir.path().to_str().unwrap(),
        "order",
        "list",
    ];
    let err = run(Cli::try_parse_from(argv).unwrap()).unwrap_err();

    assert_eq!(err.code, ErrorCode::MalformedData);
    assert!(err.message.contains("Order.txt:2"));
}
