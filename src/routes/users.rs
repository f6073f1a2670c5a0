use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::users::{AdminProbe, BuyerProbe, NewUserRequest, SellerProbe, UserList, VerifiedProbe},
    error::AppResult,
    middleware::auth::AuthUser,
    models::User,
    response::{ApiResponse, MutationSummary},
    routes::params::{RoleQuery, TargetQuery},
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(upsert_user))
        .route("/user/admin/{uid}", get(admin_probe))
        .route("/user/buyer/{uid}", get(buyer_probe))
        .route("/user/seller/{uid}", get(seller_probe))
        .route("/seller-verify/{uid}", get(verified_probe).patch(verify_seller))
        .route("/users-by-role/{uid}", get(list_by_role))
        .route("/user-delete/{uid}", delete(delete_user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUserRequest,
    responses(
        (status = 200, description = "Idempotent identity upsert", body = ApiResponse<User>)
    ),
    tag = "Users"
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::upsert_user(&state, payload).await?;
    Ok(Json(resp))
}

// The probes stay public and answer with a bare flag object, the shape the
// storefront expects.

#[utoipa::path(
    get,
    path = "/user/admin/{uid}",
    params(("uid" = String, Path, description = "User uid")),
    responses((status = 200, description = "Admin probe", body = AdminProbe)),
    tag = "Users"
)]
pub async fn admin_probe(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<AdminProbe>> {
    let is_admin = user_service::is_admin(&state, &uid).await?;
    Ok(Json(AdminProbe { is_admin }))
}

#[utoipa::path(
    get,
    path = "/user/buyer/{uid}",
    params(("uid" = String, Path, description = "User uid")),
    responses((status = 200, description = "Buyer probe", body = BuyerProbe)),
    tag = "Users"
)]
pub async fn buyer_probe(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<BuyerProbe>> {
    let is_buyer = user_service::is_buyer(&state, &uid).await?;
    Ok(Json(BuyerProbe { is_buyer }))
}

#[utoipa::path(
    get,
    path = "/user/seller/{uid}",
    params(("uid" = String, Path, description = "User uid")),
    responses((status = 200, description = "Seller probe", body = SellerProbe)),
    tag = "Users"
)]
pub async fn seller_probe(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<SellerProbe>> {
    let is_seller = user_service::is_seller(&state, &uid).await?;
    Ok(Json(SellerProbe { is_seller }))
}

#[utoipa::path(
    get,
    path = "/seller-verify/{uid}",
    params(("uid" = String, Path, description = "Seller uid")),
    responses((status = 200, description = "Verified probe", body = VerifiedProbe)),
    tag = "Users"
)]
pub async fn verified_probe(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<VerifiedProbe>> {
    let is_verified = user_service::is_verified(&state, &uid).await?;
    Ok(Json(VerifiedProbe { is_verified }))
}

#[utoipa::path(
    get,
    path = "/users-by-role/{uid}",
    params(
        ("uid" = String, Path, description = "Admin uid"),
        ("role" = String, Query, description = "Role to filter by")
    ),
    responses(
        (status = 200, description = "Users with the given role", body = ApiResponse<UserList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_by_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<RoleQuery>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_by_role(&state, &user, &uid, &query.role).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/seller-verify/{uid}",
    params(
        ("uid" = String, Path, description = "Admin uid"),
        ("id" = Uuid, Query, description = "User ID")
    ),
    responses(
        (status = 200, description = "Mark seller verified", body = ApiResponse<User>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn verify_seller(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::verify_seller(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/user-delete/{uid}",
    params(
        ("uid" = String, Path, description = "Admin uid"),
        ("id" = Uuid, Query, description = "User ID")
    ),
    responses(
        (status = 200, description = "Delete user", body = ApiResponse<MutationSummary>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<MutationSummary>>> {
    let resp = user_service::delete_user(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}
