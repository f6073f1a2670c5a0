use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::users::{NewUserRequest, UserList},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, authorize_admin},
    models::User,
    response::{ApiResponse, MutationSummary},
    state::AppState,
};

const ROLES: [&str; 3] = ["buyer", "seller", "admin"];

/// Idempotent sign-in upsert: one identity record per uid, ever.
pub async fn upsert_user(
    state: &AppState,
    payload: NewUserRequest,
) -> AppResult<ApiResponse<User>> {
    let role = payload.role.unwrap_or_else(|| "buyer".to_string());
    if !ROLES.contains(&role.as_str()) {
        return Err(AppError::BadRequest("Unknown role".into()));
    }

    let inserted: Option<User> = sqlx::query_as(
        r#"
        INSERT INTO users (id, uid, email, name, role)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (uid) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.uid)
    .bind(&payload.email)
    .bind(&payload.name)
    .bind(&role)
    .fetch_optional(&state.pool)
    .await?;

    if let Some(user) = inserted {
        return Ok(ApiResponse::success("User created", user));
    }

    let existing: User = sqlx::query_as("SELECT * FROM users WHERE uid = $1")
        .bind(&payload.uid)
        .fetch_one(&state.pool)
        .await?;

    Ok(ApiResponse::success("User already exists", existing))
}

async fn find_by_uid(state: &AppState, uid: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE uid = $1")
        .bind(uid)
        .fetch_optional(&state.pool)
        .await?;
    Ok(user)
}

// The role probes are public and answer false for unknown uids.

pub async fn is_admin(state: &AppState, uid: &str) -> AppResult<bool> {
    Ok(find_by_uid(state, uid).await?.is_some_and(|u| u.role == "admin"))
}

pub async fn is_buyer(state: &AppState, uid: &str) -> AppResult<bool> {
    Ok(find_by_uid(state, uid).await?.is_some_and(|u| u.role == "buyer"))
}

pub async fn is_seller(state: &AppState, uid: &str) -> AppResult<bool> {
    Ok(find_by_uid(state, uid).await?.is_some_and(|u| u.role == "seller"))
}

pub async fn is_verified(state: &AppState, uid: &str) -> AppResult<bool> {
    Ok(find_by_uid(state, uid)
        .await?
        .is_some_and(|u| u.status == "verified"))
}

pub async fn list_by_role(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    role: &str,
) -> AppResult<ApiResponse<UserList>> {
    authorize_admin(state, user, uid).await?;

    let items = sqlx::query_as("SELECT * FROM users WHERE role = $1 ORDER BY created_at DESC")
        .bind(role)
        .fetch_all(&state.pool)
        .await?;

    Ok(ApiResponse::success("Users", UserList { items }))
}

pub async fn verify_seller(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<User>> {
    authorize_admin(state, user, uid).await?;

    let updated: Option<User> =
        sqlx::query_as("UPDATE users SET status = 'verified' WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&state.pool)
            .await?;
    let updated = updated.ok_or(AppError::NotFound)?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(&user.uid),
        "seller_verify",
        Some("users"),
        Some(json!({ "user_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Seller verified", updated))
}

pub async fn delete_user(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<MutationSummary>> {
    authorize_admin(state, user, uid).await?;

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(&user.uid),
        "user_delete",
        Some("users"),
        Some(json!({ "user_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "User deleted",
        MutationSummary {
            rows_affected: result.rows_affected(),
        },
    ))
}
