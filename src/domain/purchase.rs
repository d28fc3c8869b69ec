use super::catalog::Money;
use super::customer::{Address, Customer};
use super::order::{OrderItem, OrderTrackingNumber};
use serde::{Deserialize, Serialize};

/// Totals as reported by the client's cart. They are informational only:
/// checkout recomputes both values from the items.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct OrderHeader {
    #[serde(default)]
    pub total_price: Money,
    #[serde(default)]
    pub total_quantity: u32,
}

/// The checkout request: everything needed to place one order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Purchase {
    pub customer: Customer,
    pub shipping_address: Address,
    pub billing_address: Address,
    #[serde(default)]
    pub order: OrderHeader,
    pub order_items: Vec<OrderItem>,
}

/// Returned to the client after a successful checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PurchaseResponse {
    pub order_tracking_number: OrderTrackingNumber,
}

/// Input to payment intent creation. `amount` is in the currency's minor
/// units (cents for USD).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentInfo {
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt_email: Option<String>,
}

/// The processor-side handle for a pending or settled payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}
