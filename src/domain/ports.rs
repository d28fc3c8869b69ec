use super::catalog::{Page, PageRequest, Product, ProductCategory};
use super::customer::Customer;
use super::order::{Order, OrderTrackingNumber};
use super::purchase::{PaymentInfo, PaymentIntent};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn store(&self, product: Product) -> Result<()>;
    async fn get(&self, product_id: u64) -> Result<Option<Product>>;
    async fn store_category(&self, category: ProductCategory) -> Result<()>;
    async fn all_categories(&self) -> Result<Vec<ProductCategory>>;
    /// Products in a category, ordered by id.
    async fn find_by_category(
        &self,
        category_id: u64,
        request: PageRequest,
    ) -> Result<Page<Product>>;
    /// Case-insensitive substring match on the product name, ordered by id.
    async fn search_by_name(&self, keyword: &str, request: PageRequest) -> Result<Page<Product>>;
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn store(&self, customer: Customer) -> Result<()>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, tracking_number: OrderTrackingNumber) -> Result<Option<Order>>;
    /// A customer's orders, most recent first.
    async fn find_by_customer_email(
        &self,
        email: &str,
        request: PageRequest,
    ) -> Result<Page<Order>>;
}

/// Boundary to the external payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(&self, info: &PaymentInfo) -> Result<PaymentIntent>;
}

pub type ProductStoreBox = Box<dyn ProductStore>;
pub type CustomerStoreBox = Box<dyn CustomerStore>;
pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
