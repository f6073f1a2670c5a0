use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, patch},
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Product,
    response::{ApiResponse, MutationSummary},
    routes::params::TargetQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products/{uid}",
            get(list_seller_products).post(create_product),
        )
        .route("/category/{id}", get(list_by_category))
        .route("/reported-products/{uid}", get(list_reported))
        .route("/report-product/{uid}", patch(report_product))
        .route("/product-delete/{uid}", delete(delete_product))
        .route("/report-product-safe/{uid}", patch(clear_report))
        .route("/report-product-delete/{uid}", delete(delete_reported))
        .route("/promoted-product", get(list_promoted))
        .route("/promote-product/{uid}", patch(promote_product))
}

#[utoipa::path(
    get,
    path = "/products/{uid}",
    params(("uid" = String, Path, description = "Seller uid")),
    responses(
        (status = 200, description = "Seller's own listings", body = ApiResponse<ProductList>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn list_seller_products(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_by_seller(&state, &user, &uid).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/products/{uid}",
    params(("uid" = String, Path, description = "Seller uid")),
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create listing", body = ApiResponse<Product>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::create_product(&state, &user, &uid, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/category/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Listings in a category", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_by_category(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/reported-products/{uid}",
    params(("uid" = String, Path, description = "Admin uid")),
    responses(
        (status = 200, description = "Reported listings", body = ApiResponse<ProductList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn list_reported(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_reported(&state, &user, &uid).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/report-product/{uid}",
    params(
        ("uid" = String, Path, description = "Reporting buyer uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Report listing", body = ApiResponse<Product>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn report_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::report_product(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/product-delete/{uid}",
    params(
        ("uid" = String, Path, description = "Seller uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Delete own listing", body = ApiResponse<MutationSummary>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<MutationSummary>>> {
    let resp = product_service::delete_own_product(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/report-product-safe/{uid}",
    params(
        ("uid" = String, Path, description = "Admin uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Clear reports on a listing", body = ApiResponse<Product>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn clear_report(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::clear_report(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/report-product-delete/{uid}",
    params(
        ("uid" = String, Path, description = "Admin uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Delete reported listing", body = ApiResponse<MutationSummary>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_reported(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<MutationSummary>>> {
    let resp = product_service::delete_reported_product(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/promoted-product",
    responses(
        (status = 200, description = "Promoted listings", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_promoted(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_promoted(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/promote-product/{uid}",
    params(
        ("uid" = String, Path, description = "Seller uid"),
        ("id" = Uuid, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Promote listing", body = ApiResponse<Product>),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn promote_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(uid): Path<String>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::promote_product(&state, &user, &uid, query.id).await?;
    Ok(Json(resp))
}
