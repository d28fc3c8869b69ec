use crate::domain::catalog::Money;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::purchase::PaymentIntent;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One confirmation row, as printed after a successful checkout.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OrderConfirmation {
    pub tracking_number: String,
    pub email: String,
    pub total_quantity: u32,
    pub total_price: Money,
    pub status: OrderStatus,
    pub payment_intent: String,
}

impl OrderConfirmation {
    pub fn new(order: &Order, intent: &PaymentIntent) -> Self {
        Self {
            tracking_number: order.tracking_number.to_string(),
            email: order.customer_email.clone(),
            total_quantity: order.total_quantity,
            total_price: order.total_price,
            status: order.status,
            payment_intent: intent.id.clone(),
        }
    }
}

/// Writes order confirmations as CSV to any `Write` sink.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_confirmation(&mut self, confirmation: &OrderConfirmation) -> Result<()> {
        self.writer.serialize(confirmation)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
