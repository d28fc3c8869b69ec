use crate::domain::catalog::{Product, ProductCategory};
use crate::error::{CommerceError, Result};
use std::io::Read;

/// Reads catalog products from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Product>`. It handles whitespace trimming and flexible record
/// lengths automatically. Expected header:
/// `id,sku,name,description,unit_price,image_url,active,units_in_stock,category_id`.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    /// Creates a new `ProductReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes products.
    ///
    /// This allows loading large catalogs in a streaming fashion without
    /// holding the entire file in memory.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CommerceError::from))
    }
}

/// Reads product categories from a CSV source (`id,category_name`).
pub struct CategoryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CategoryReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn categories(self) -> impl Iterator<Item = Result<ProductCategory>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CommerceError::from))
    }
}
