use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::blogs::{BlogList, CreateBlogRequest},
    error::AppResult,
    models::Blog,
    response::ApiResponse,
    services::blog_service,
    state::AppState,
};

// Blog endpoints have no auth in any deployed version of this service.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blog", post(create_blog))
}

#[utoipa::path(
    get,
    path = "/blogs",
    responses((status = 200, description = "List blog posts", body = ApiResponse<BlogList>)),
    tag = "Blogs"
)]
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<ApiResponse<BlogList>>> {
    let resp = blog_service::list_blogs(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/blog",
    request_body = CreateBlogRequest,
    responses((status = 200, description = "Create blog post", body = ApiResponse<Blog>)),
    tag = "Blogs"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogRequest>,
) -> AppResult<Json<ApiResponse<Blog>>> {
    let resp = blog_service::create_blog(&state, payload).await?;
    Ok(Json(resp))
}
