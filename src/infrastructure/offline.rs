use crate::domain::ports::PaymentGateway;
use crate::domain::purchase::{PaymentInfo, PaymentIntent};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// A local payment gateway that approves everything.
///
/// Used when no processor credentials are configured, and in tests: checkout
/// stays exercisable without network access. Intent ids follow the processor
/// convention (`pi_` prefix) so downstream code paths are identical.
#[derive(Default, Clone)]
pub struct OfflineGateway;

impl OfflineGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for OfflineGateway {
    async fn create_payment_intent(&self, info: &PaymentInfo) -> Result<PaymentIntent> {
        let token = Uuid::new_v4().simple().to_string();
        tracing::debug!(amount = info.amount, currency = %info.currency, "offline intent");
        Ok(PaymentIntent {
            id: format!("pi_{token}"),
            client_secret: format!("pi_{token}_secret"),
            amount: info.amount,
            currency: info.currency.to_ascii_lowercase(),
            status: "succeeded".to_string(),
        })
    }
}
