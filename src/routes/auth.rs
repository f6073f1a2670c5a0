use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::auth::{TokenRequest, TokenResponse},
    error::AppResult,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/jwt", post(issue_token))
}

#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Issue signed credential", body = ApiResponse<TokenResponse>)
    ),
    tag = "Auth"
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> AppResult<Json<ApiResponse<TokenResponse>>> {
    let resp = auth_service::issue_token(&state.config, payload)?;
    Ok(Json(resp))
}
