use crate::domain::ports::PaymentGateway;
use crate::domain::purchase::{PaymentInfo, PaymentIntent};
use crate::error::{CommerceError, Result};
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Payment gateway backed by the Stripe PaymentIntents API.
///
/// Requests are form-encoded and authenticated with the secret key as a
/// bearer token, matching Stripe's wire format. No retries: a failed intent
/// surfaces to the caller, who decides whether to re-submit the purchase.
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, DEFAULT_BASE_URL)
    }

    /// Overrides the API host. Exists for tests pointed at a stub server.
    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }

    fn intent_params(info: &PaymentInfo) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", info.amount.to_string()),
            ("currency", info.currency.to_ascii_lowercase()),
            ("payment_method_types[]", "card".to_string()),
        ];
        if let Some(email) = &info.receipt_email {
            params.push(("receipt_email", email.clone()));
        }
        params
    }
}

#[derive(Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: String,
    amount: i64,
    currency: String,
    status: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, info: &PaymentInfo) -> Result<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&Self::intent_params(info))
            .send()
            .await
            .map_err(|e| CommerceError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Stripe wraps failures in an error object with a readable message.
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("unexpected status {status}"),
            };
            tracing::warn!(%status, %message, "payment intent rejected");
            return Err(CommerceError::Gateway(message));
        }

        let intent: IntentResponse = response
            .json()
            .await
            .map_err(|e| CommerceError::Gateway(e.to_string()))?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
        })
    }
}
