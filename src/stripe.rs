use serde::Deserialize;

use crate::error::{AppError, AppResult};

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Minimal Stripe client; the checkout flow only ever creates payment
/// intents, so that is the only call wrapped here.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

impl StripeClient {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
        }
    }

    /// `amount` is in the currency's smallest unit (cents for USD).
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> AppResult<PaymentIntent> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "payment intent rejected");
            return Err(AppError::BadRequest("Payment intent rejected".into()));
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}
