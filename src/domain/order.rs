use super::catalog::Money;
use super::customer::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque identifier handed back to the customer at checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(transparent)]
pub struct OrderTrackingNumber(Uuid);

impl OrderTrackingNumber {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OrderTrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderTrackingNumber {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Cancelled,
}

/// One line of an order. The unit price is captured at purchase time so later
/// catalog price changes do not affect placed orders.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderItem {
    pub product_id: u64,
    pub quantity: u32,
    pub unit_price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A placed order with its items and the addresses it was placed against.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub tracking_number: OrderTrackingNumber,
    pub status: OrderStatus,
    pub total_price: Money,
    pub total_quantity: u32,
    pub customer_email: String,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub items: Vec<OrderItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
}

impl Order {
    /// Recomputes `(total_price, total_quantity)` from the items.
    pub fn totals_of(items: &[OrderItem]) -> (Money, u32) {
        let mut price = Money::ZERO;
        let mut quantity = 0u32;
        for item in items {
            price += item.line_total();
            quantity += item.quantity;
        }
        (price, quantity)
    }
}
