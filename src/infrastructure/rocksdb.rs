use crate::domain::catalog::{Page, PageRequest, Product, ProductCategory};
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderTrackingNumber};
use crate::domain::ports::{CustomerStore, OrderStore, ProductStore};
use crate::error::{CommerceError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for catalog products.
pub const CF_PRODUCTS: &str = "products";
/// Column Family for product categories.
pub const CF_CATEGORIES: &str = "categories";
/// Column Family for customers, keyed by email.
pub const CF_CUSTOMERS: &str = "customers";
/// Column Family for placed orders, keyed by tracking number.
pub const CF_ORDERS: &str = "orders";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for products, categories, customers and orders using
/// separate Column Families. Values are JSON; numeric keys are big-endian
/// so iteration order matches id order.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that all required column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let descriptors = [CF_PRODUCTS, CF_CATEGORIES, CF_CUSTOMERS, CF_ORDERS]
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect::<Vec<_>>();

        let db = DB::open_cf_descriptors(&opts, path, descriptors)?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            CommerceError::Internal(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }

    fn put<T: Serialize>(&self, cf_name: &str, key: &[u8], value: &T) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let bytes = serde_json::to_vec(value)?;
        self.db.put_cf(&cf, key, bytes)?;
        Ok(())
    }

    fn fetch<T: DeserializeOwned>(&self, cf_name: &str, key: &[u8]) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        match self.db.get_cf(&cf, key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn scan<T, F>(&self, cf_name: &str, mut keep: F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let cf = self.cf(cf_name)?;
        let mut out = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            let parsed: T = serde_json::from_slice(&value)?;
            if keep(&parsed) {
                out.push(parsed);
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl ProductStore for RocksDbStore {
    async fn store(&self, product: Product) -> Result<()> {
        self.put(CF_PRODUCTS, &product.id.to_be_bytes(), &product)
    }

    async fn get(&self, product_id: u64) -> Result<Option<Product>> {
        self.fetch(CF_PRODUCTS, &product_id.to_be_bytes())
    }

    async fn store_category(&self, category: ProductCategory) -> Result<()> {
        self.put(CF_CATEGORIES, &category.id.to_be_bytes(), &category)
    }

    async fn all_categories(&self) -> Result<Vec<ProductCategory>> {
        self.scan(CF_CATEGORIES, |_: &ProductCategory| true)
    }

    async fn find_by_category(
        &self,
        category_id: u64,
        request: PageRequest,
    ) -> Result<Page<Product>> {
        let matches = self.scan(CF_PRODUCTS, |p: &Product| p.category_id == category_id)?;
        Ok(Page::from_slice(matches, request))
    }

    async fn search_by_name(&self, keyword: &str, request: PageRequest) -> Result<Page<Product>> {
        let needle = keyword.to_lowercase();
        let matches = self.scan(CF_PRODUCTS, |p: &Product| {
            p.name.to_lowercase().contains(&needle)
        })?;
        Ok(Page::from_slice(matches, request))
    }
}

#[async_trait]
impl CustomerStore for RocksDbStore {
    async fn store(&self, customer: Customer) -> Result<()> {
        let key = customer.email.clone();
        self.put(CF_CUSTOMERS, key.as_bytes(), &customer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        self.fetch(CF_CUSTOMERS, email.as_bytes())
    }
}

#[async_trait]
impl OrderStore for RocksDbStore {
    async fn store(&self, order: Order) -> Result<()> {
        let key = order.tracking_number.to_string();
        self.put(CF_ORDERS, key.as_bytes(), &order)
    }

    async fn get(&self, tracking_number: OrderTrackingNumber) -> Result<Option<Order>> {
        self.fetch(CF_ORDERS, tracking_number.to_string().as_bytes())
    }

    async fn find_by_customer_email(
        &self,
        email: &str,
        request: PageRequest,
    ) -> Result<Page<Order>> {
        let mut matches = self.scan(CF_ORDERS, |o: &Order| o.customer_email == email)?;
        matches.sort_by(|a, b| b.date_created.cmp(&a.date_created));
        Ok(Page::from_slice(matches, request))
    }
}
