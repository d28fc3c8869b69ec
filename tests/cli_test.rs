use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/products.csv")
        .arg("tests/fixtures/purchases.jsonl")
        .arg("--categories")
        .arg("tests/fixtures/categories.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "tracking_number,email,total_quantity,total_price,status,payment_intent",
        ))
        // Ada: 2 x 14.99 + 1 x 18.99 = 48.97
        .stdout(predicate::str::contains("ada@example.com,3,48.97,paid,pi_"))
        // Bob: 1 x 20.99
        .stdout(predicate::str::contains("bob@example.com,1,20.99,paid,pi_"));

    Ok(())
}

#[test]
fn test_cli_missing_products_file() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/does_not_exist.csv")
        .arg("tests/fixtures/purchases.jsonl");

    cmd.assert().failure();
}

#[test]
fn test_cli_works_without_categories() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/products.csv")
        .arg("tests/fixtures/purchases.jsonl");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"));
}
