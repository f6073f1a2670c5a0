use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
    pub product_id: Uuid,
    /// Amount actually charged, in USD cents.
    pub amount: i64,
    pub email: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
