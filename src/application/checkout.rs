use crate::domain::order::{Order, OrderStatus, OrderTrackingNumber};
use crate::domain::ports::{
    CustomerStoreBox, OrderStoreBox, PaymentGatewayBox, ProductStoreBox,
};
use crate::domain::purchase::{PaymentInfo, PaymentIntent, Purchase, PurchaseResponse};
use crate::error::{CommerceError, Result};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Currencies the store accepts. Conversion is out of scope.
pub const SUPPORTED_CURRENCIES: &[&str] = &["usd", "eur", "gbp"];

/// The main entry point for placing orders and initiating payments.
///
/// `CheckoutService` owns the storage backends and the payment gateway.
/// It ensures sequential consistency by awaiting storage operations for
/// each purchase.
pub struct CheckoutService {
    product_store: ProductStoreBox,
    customer_store: CustomerStoreBox,
    order_store: OrderStoreBox,
    gateway: PaymentGatewayBox,
}

impl CheckoutService {
    pub fn new(
        product_store: ProductStoreBox,
        customer_store: CustomerStoreBox,
        order_store: OrderStoreBox,
        gateway: PaymentGatewayBox,
    ) -> Self {
        Self {
            product_store,
            customer_store,
            order_store,
            gateway,
        }
    }

    /// Places an order from a purchase request.
    ///
    /// Validates the customer and both addresses, checks every item against
    /// the catalog, recomputes totals from the items (client-sent totals are
    /// ignored), deduplicates the customer by email, decrements stock and
    /// persists the order under a fresh tracking number.
    ///
    /// Failures leave the catalog untouched: stock is only decremented after
    /// the whole purchase has been validated.
    pub async fn place_order(&self, purchase: Purchase) -> Result<PurchaseResponse> {
        purchase.customer.validate()?;
        purchase.shipping_address.validate("shipping_address")?;
        purchase.billing_address.validate("billing_address")?;

        if purchase.order_items.is_empty() {
            return Err(CommerceError::Validation(
                "order_items must not be empty".to_string(),
            ));
        }

        // Aggregate quantities per product so a product listed on several
        // lines is checked and decremented against its combined total.
        let mut wanted: BTreeMap<u64, u32> = BTreeMap::new();
        for item in &purchase.order_items {
            if item.quantity == 0 {
                return Err(CommerceError::Validation(format!(
                    "quantity must be positive for product {}",
                    item.product_id
                )));
            }
            *wanted.entry(item.product_id).or_default() += item.quantity;
        }

        // Validate all items before touching stock.
        let mut products = Vec::with_capacity(wanted.len());
        for (&product_id, &quantity) in &wanted {
            let product = self
                .product_store
                .get(product_id)
                .await?
                .ok_or_else(|| CommerceError::NotFound(format!("product {product_id}")))?;
            if !product.can_fulfil(quantity) {
                return Err(CommerceError::Validation(format!(
                    "product {product_id} cannot fulfil quantity {quantity}"
                )));
            }
            products.push(product);
        }

        // Stock writes start only once every line has been validated, so a
        // rejected purchase never leaves a partial decrement behind.
        for mut product in products {
            product.units_in_stock -= wanted[&product.id];
            self.product_store.store(product).await?;
        }

        // Returning customers keep their existing record.
        let email = purchase.customer.email.clone();
        if self.customer_store.find_by_email(&email).await?.is_none() {
            self.customer_store.store(purchase.customer).await?;
        }

        let (total_price, total_quantity) = Order::totals_of(&purchase.order_items);
        let tracking_number = OrderTrackingNumber::generate();
        let order = Order {
            tracking_number,
            status: OrderStatus::Created,
            total_price,
            total_quantity,
            customer_email: email,
            shipping_address: purchase.shipping_address,
            billing_address: purchase.billing_address,
            items: purchase.order_items,
            date_created: OffsetDateTime::now_utc(),
        };
        self.order_store.store(order).await?;

        tracing::info!(%tracking_number, %total_price, total_quantity, "order placed");

        Ok(PurchaseResponse {
            order_tracking_number: tracking_number,
        })
    }

    /// Creates a payment intent for an order total.
    ///
    /// Amount and currency are validated before the gateway is reached, so a
    /// bad request never leaves the process.
    pub async fn create_payment_intent(&self, info: &PaymentInfo) -> Result<PaymentIntent> {
        if info.amount <= 0 {
            return Err(CommerceError::Validation(
                "payment amount must be positive".to_string(),
            ));
        }
        let currency = info.currency.to_ascii_lowercase();
        if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
            return Err(CommerceError::Validation(format!(
                "unsupported currency: {}",
                info.currency
            )));
        }

        self.gateway.create_payment_intent(info).await
    }

    /// Marks an order as paid. Idempotent on already-paid orders.
    pub async fn mark_paid(&self, tracking_number: OrderTrackingNumber) -> Result<()> {
        let mut order = self
            .order_store
            .get(tracking_number)
            .await?
            .ok_or_else(|| CommerceError::NotFound(format!("order {tracking_number}")))?;

        match order.status {
            OrderStatus::Paid => Ok(()),
            OrderStatus::Cancelled => Err(CommerceError::Validation(format!(
                "order {tracking_number} is cancelled"
            ))),
            OrderStatus::Created => {
                order.status = OrderStatus::Paid;
                self.order_store.store(order).await
            }
        }
    }
}
