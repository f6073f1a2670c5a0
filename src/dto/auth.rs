use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity payload posted to `/jwt`; it is signed as-is.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub uid: String,
    pub email: Option<String>,
    pub exp: usize,
}
