use crate::domain::catalog::{Page, PageRequest, Product, ProductCategory};
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderTrackingNumber};
use crate::domain::ports::{CustomerStore, OrderStore, ProductStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for the product catalog.
///
/// Uses `Arc<RwLock<HashMap<..>>>` to allow shared concurrent access.
/// Ideal for testing or small catalogs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<u64, Product>>>,
    categories: Arc<RwLock<HashMap<u64, ProductCategory>>>,
}

impl InMemoryProductStore {
    /// Creates a new, empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn store(&self, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(product.id, product);
        Ok(())
    }

    async fn get(&self, product_id: u64) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&product_id).cloned())
    }

    async fn store_category(&self, category: ProductCategory) -> Result<()> {
        let mut categories = self.categories.write().await;
        categories.insert(category.id, category);
        Ok(())
    }

    async fn all_categories(&self) -> Result<Vec<ProductCategory>> {
        let categories = self.categories.read().await;
        let mut all: Vec<ProductCategory> = categories.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn find_by_category(
        &self,
        category_id: u64,
        request: PageRequest,
    ) -> Result<Page<Product>> {
        let products = self.products.read().await;
        let mut matches: Vec<Product> = products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(Page::from_slice(matches, request))
    }

    async fn search_by_name(&self, keyword: &str, request: PageRequest) -> Result<Page<Product>> {
        let needle = keyword.to_lowercase();
        let products = self.products.read().await;
        let mut matches: Vec<Product> = products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by_key(|p| p.id);
        Ok(Page::from_slice(matches, request))
    }
}

/// A thread-safe in-memory store for customers, keyed by email.
#[derive(Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
}

impl InMemoryCustomerStore {
    /// Creates a new, empty in-memory customer store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn store(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.email.clone(), customer);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(email).cloned())
    }
}

/// A thread-safe in-memory store for placed orders, keyed by tracking number.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderTrackingNumber, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn store(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.tracking_number, order);
        Ok(())
    }

    async fn get(&self, tracking_number: OrderTrackingNumber) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&tracking_number).cloned())
    }

    async fn find_by_customer_email(
        &self,
        email: &str,
        request: PageRequest,
    ) -> Result<Page<Order>> {
        let orders = self.orders.read().await;
        let mut matches: Vec<Order> = orders
            .values()
            .filter(|o| o.customer_email == email)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date_created.cmp(&a.date_created));
        Ok(Page::from_slice(matches, request))
    }
}
