use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub const CATALOG_HEADER: [&str; 9] = [
    "id",
    "sku",
    "name",
    "description",
    "unit_price",
    "image_url",
    "active",
    "units_in_stock",
    "category_id",
];

/// Writes a small deterministic catalog: `rows` products, all in category 1,
/// priced 1.00 each with 100 units in stock.
pub fn generate_catalog(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(CATALOG_HEADER)?;
    for i in 1..=rows {
        wtr.write_record([
            &i.to_string(),
            &format!("SKU-{i:03}"),
            &format!("Product {i}"),
            "",
            "1.00",
            "",
            "true",
            "100",
            "1",
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a randomized catalog spread over `categories` categories with
/// varying prices and stock levels.
pub fn generate_random_catalog(path: &Path, rows: usize, categories: u64) -> Result<(), Error> {
    let mut rng = rand::thread_rng();
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(CATALOG_HEADER)?;
    for i in 1..=rows {
        let cents: u32 = rng.gen_range(100..10_000);
        let stock: u32 = rng.gen_range(1..100);
        let category: u64 = rng.gen_range(1..=categories);
        wtr.write_record([
            &i.to_string(),
            &format!("SKU-{i:03}"),
            &format!("Product {i}"),
            "",
            &format!("{}.{:02}", cents / 100, cents % 100),
            "",
            "true",
            &stock.to_string(),
            &category.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One purchase request as a JSON line. `items` is `(product_id, quantity, unit_price)`.
pub fn purchase_line(email: &str, items: &[(u64, u32, &str)]) -> String {
    let items_json: Vec<String> = items
        .iter()
        .map(|(id, qty, price)| {
            format!(r#"{{"product_id": {id}, "quantity": {qty}, "unit_price": "{price}"}}"#)
        })
        .collect();
    format!(
        r#"{{"customer": {{"first_name": "Ada", "last_name": "Lovelace", "email": "{email}"}}, "shipping_address": {{"street": "1 Main St", "city": "Springfield", "state": "IL", "country": "US", "zip_code": "62701"}}, "billing_address": {{"street": "1 Main St", "city": "Springfield", "state": "IL", "country": "US", "zip_code": "62701"}}, "order_items": [{}]}}"#,
        items_json.join(", ")
    )
}

/// Writes purchase lines to a file, one JSON object per line.
pub fn write_purchases(path: &Path, lines: &[String]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
