use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::{
    config::AppConfig,
    dto::auth::{Claims, TokenRequest, TokenResponse},
    error::{AppError, AppResult},
    response::ApiResponse,
};

/// Sign the posted identity payload. No password exchange exists in this
/// service; the front end authenticates the user elsewhere and trades the
/// resulting uid for an API token here.
pub fn issue_token(
    config: &AppConfig,
    payload: TokenRequest,
) -> AppResult<ApiResponse<TokenResponse>> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::seconds(config.jwt_expires_in_secs))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        uid: payload.uid,
        email: payload.email,
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(ApiResponse::success("Token issued", TokenResponse { token }))
}
