use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::post,
};
use uuid::Uuid;

use crate::{
    dto::payments::{PaymentIntentResponse, RecordPaymentRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Payment,
    response::ApiResponse,
    routes::params::TargetQuery,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent/{uid}", post(create_payment_intent))
        .route("/payments/{uid}", post(record_payment))
}

#[utoipa::path(
    post,
    path = "/create-payment-intent/{uid}",
    params(
        ("uid" = String, Path, description = "Buyer uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Client secret for the listing price", body = ApiResponse<PaymentIntentResponse>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<PaymentIntentResponse>>> {
    let resp = payment_service::create_intent(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/payments/{uid}",
    params(("uid" = String, Path, description = "Buyer uid")),
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Record payment and cascade order/product flags", body = ApiResponse<Payment>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let resp = payment_service::record_payment(&state, &user, &uid, payload).await?;
    Ok(Json(resp))
}
