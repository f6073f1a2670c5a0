use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUserRequest {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminProbe {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BuyerProbe {
    #[serde(rename = "isBuyer")]
    pub is_buyer: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SellerProbe {
    #[serde(rename = "isSeller")]
    pub is_seller: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifiedProbe {
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}
