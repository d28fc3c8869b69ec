use crate::domain::purchase::Purchase;
use crate::error::{CommerceError, Result};
use std::io::Read;

/// Reads purchase requests from a JSON Lines source.
///
/// Each line (or whitespace-separated JSON value) is one `Purchase`. A
/// malformed value yields an `Err` for that entry; the stream stops at the
/// first syntax error, matching `serde_json`'s stream semantics.
pub struct PurchaseReader<R: Read> {
    source: R,
}

impl<R: Read> PurchaseReader<R> {
    /// Creates a new `PurchaseReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and deserializes purchases.
    pub fn purchases(self) -> impl Iterator<Item = Result<Purchase>> {
        serde_json::Deserializer::from_reader(self.source)
            .into_iter::<Purchase>()
            .map(|result| result.map_err(CommerceError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase_json(email: &str) -> String {
        format!(
            r#"{{"customer": {{"first_name": "Ada", "last_name": "Lovelace", "email": "{email}"}}, "shipping_address": {{"street": "1 Main St", "city": "Springfield", "state": "IL", "country": "US", "zip_code": "62701"}}, "billing_address": {{"street": "1 Main St", "city": "Springfield", "state": "IL", "country": "US", "zip_code": "62701"}}, "order_items": [{{"product_id": 1, "quantity": 2, "unit_price": "9.99"}}]}}"#
        )
    }

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{}\n{}\n",
            purchase_json("ada@example.com"),
            purchase_json("bob@example.com")
        );
        let reader = PurchaseReader::new(data.as_bytes());
        let results: Vec<Result<Purchase>> = reader.purchases().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1].as_ref().unwrap().customer.email,
            "bob@example.com"
        );
    }

    #[test]
    fn test_reader_malformed_value() {
        let data = r#"{"customer": 42}"#;
        let reader = PurchaseReader::new(data.as_bytes());
        let results: Vec<Result<Purchase>> = reader.purchases().collect();

        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
