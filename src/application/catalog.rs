use crate::domain::catalog::{Page, PageRequest, Product, ProductCategory};
use crate::domain::ports::ProductStoreBox;
use crate::error::{CommerceError, Result};

/// Read-side queries over the product catalog.
pub struct CatalogService {
    product_store: ProductStoreBox,
}

impl CatalogService {
    pub fn new(product_store: ProductStoreBox) -> Self {
        Self { product_store }
    }

    pub async fn product(&self, product_id: u64) -> Result<Product> {
        self.product_store
            .get(product_id)
            .await?
            .ok_or_else(|| CommerceError::NotFound(format!("product {product_id}")))
    }

    /// Products in a category. An empty page is not an error.
    pub async fn by_category(
        &self,
        category_id: u64,
        request: PageRequest,
    ) -> Result<Page<Product>> {
        self.product_store.find_by_category(category_id, request).await
    }

    /// Keyword search on product names, case-insensitive.
    pub async fn search(&self, keyword: &str, request: PageRequest) -> Result<Page<Product>> {
        self.product_store.search_by_name(keyword, request).await
    }

    pub async fn categories(&self) -> Result<Vec<ProductCategory>> {
        self.product_store.all_categories().await
    }
}
