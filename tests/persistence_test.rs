#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::{NamedTempFile, tempdir};

mod common;

#[test]
fn test_rocksdb_stock_survives_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("store_db");

    let catalog = NamedTempFile::new().unwrap();
    common::generate_catalog(catalog.path(), 1).unwrap();

    // 1. First run: buy 60 of the 100 units.
    let purchases1 = NamedTempFile::new().unwrap();
    common::write_purchases(
        purchases1.path(),
        &[common::purchase_line("ada@example.com", &[(1, 60, "1.00")])],
    )
    .unwrap();

    let output1 = Command::new(cargo_bin!("storefront"))
        .arg(catalog.path())
        .arg(purchases1.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("ada@example.com,60,60.00,paid,pi_"));

    // 2. Second run against the same DB: only 40 units remain, so 41 must fail
    //    even though the catalog CSV is re-read. The catalog load overwrites
    //    product rows, so use an empty catalog to prove stock came from disk.
    let empty_catalog = NamedTempFile::new().unwrap();
    common::generate_catalog(empty_catalog.path(), 0).unwrap();

    let purchases2 = NamedTempFile::new().unwrap();
    common::write_purchases(
        purchases2.path(),
        &[
            common::purchase_line("bob@example.com", &[(1, 41, "1.00")]),
            common::purchase_line("eve@example.com", &[(1, 40, "1.00")]),
        ],
    )
    .unwrap();

    let output2 = Command::new(cargo_bin!("storefront"))
        .arg(empty_catalog.path())
        .arg(purchases2.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(!stdout2.contains("bob@example.com"));
    assert!(stdout2.contains("eve@example.com,40,40.00,paid,pi_"));
}

#[test]
fn test_rocksdb_orders_survive_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("store_db");

    let catalog = NamedTempFile::new().unwrap();
    common::generate_catalog(catalog.path(), 1).unwrap();

    let purchases = NamedTempFile::new().unwrap();
    common::write_purchases(
        purchases.path(),
        &[common::purchase_line("ada@example.com", &[(1, 1, "1.00")])],
    )
    .unwrap();

    let output = Command::new(cargo_bin!("storefront"))
        .arg(catalog.path())
        .arg(purchases.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    // Second run with no purchases: opening the DB again must succeed and the
    // customer written in run one must dedupe a repeat purchase.
    let purchases2 = NamedTempFile::new().unwrap();
    common::write_purchases(
        purchases2.path(),
        &[common::purchase_line("ada@example.com", &[(1, 1, "1.00")])],
    )
    .unwrap();

    let output2 = Command::new(cargo_bin!("storefront"))
        .arg(catalog.path())
        .arg(purchases2.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains("ada@example.com,1,1.00,paid,pi_"));
}
