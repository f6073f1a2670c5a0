use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Order,
    response::ApiResponse,
    routes::params::TargetQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders/{uid}", get(list_orders).post(create_order))
        .route("/order/{uid}", get(get_order))
}

#[utoipa::path(
    get,
    path = "/orders/{uid}",
    params(("uid" = String, Path, description = "Customer uid")),
    responses(
        (status = 200, description = "Customer's orders", body = ApiResponse<OrderList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_for_customer(&state, &user, &uid).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders/{uid}",
    params(("uid" = String, Path, description = "Customer uid")),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Create order", body = ApiResponse<Order>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::create_order(&state, &user, &uid, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/order/{uid}",
    params(
        ("uid" = String, Path, description = "Customer uid"),
        ("id" = Uuid, Query, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Fetch single order", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}
