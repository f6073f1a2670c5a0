use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity store record, keyed by the externally issued `uid` (distinct
/// from the row id).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub seller_uid: String,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub resell_price: i64,
    pub reported: bool,
    #[serde(rename = "reportCount")]
    pub report_count: i32,
    pub promote: bool,
    pub order_status: bool,
    #[serde(rename = "createAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub customer_uid: String,
    pub product_id: Uuid,
    pub meeting_location: Option<String>,
    pub phone: Option<String>,
    pub order_status: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub amount: i64,
    pub email: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}
