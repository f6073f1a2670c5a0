use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::{
    dto::auth::Claims,
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

/// Caller identity resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

pub fn decode_token(secret: &str, token: &str) -> AppResult<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;
    Ok(decoded.claims)
}

/// Ownership check: the uid embedded in the path must be the caller's own.
pub fn ensure_owner(user: &AuthUser, uid: &str) -> AppResult<()> {
    if user.uid != uid {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// Role check, resolved against the identity store rather than the token.
///
/// With `legacy_role_gate` set, a caller without any identity record passes
/// this check; only a record with the wrong role rejects.
pub async fn ensure_role(state: &AppState, user: &AuthUser, role: Role) -> AppResult<()> {
    let record: Option<User> = sqlx::query_as("SELECT * FROM users WHERE uid = $1")
        .bind(&user.uid)
        .fetch_optional(&state.pool)
        .await?;

    match record {
        Some(u) if u.role == role.as_str() => Ok(()),
        Some(_) => Err(AppError::Forbidden),
        None if state.config.legacy_role_gate => Ok(()),
        None => Err(AppError::Forbidden),
    }
}

/// Full gate for seller routes parameterized by a path uid.
pub async fn authorize_seller(state: &AppState, user: &AuthUser, uid: &str) -> AppResult<()> {
    ensure_role(state, user, Role::Seller).await?;
    ensure_owner(user, uid)
}

/// Full gate for admin routes parameterized by a path uid.
pub async fn authorize_admin(state: &AppState, user: &AuthUser, uid: &str) -> AppResult<()> {
    ensure_role(state, user, Role::Admin).await?;
    ensure_owner(user, uid)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::Unauthorized)?;
        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?
            .trim();

        let claims = decode_token(&state.config.jwt_secret, token)?;

        Ok(AuthUser {
            uid: claims.uid,
            email: claims.email,
        })
    }
}
