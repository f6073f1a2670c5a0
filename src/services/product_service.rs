use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, authorize_admin, authorize_seller, ensure_owner},
    models::Product,
    response::{ApiResponse, MutationSummary},
    state::AppState,
};

pub async fn list_by_seller(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
) -> AppResult<ApiResponse<ProductList>> {
    authorize_seller(state, user, uid).await?;

    let items = Products::find()
        .filter(Column::SellerUid.eq(uid))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Products", ProductList { items }))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    authorize_seller(state, user, uid).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        seller_uid: Set(uid.to_string()),
        category_id: Set(payload.category_id),
        name: Set(payload.name),
        description: Set(payload.description),
        resell_price: Set(payload.resell_price),
        reported: Set(false),
        report_count: Set(0),
        promote: Set(false),
        order_status: Set(false),
        created_at: NotSet,
    };
    let product = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Product created",
        product_from_entity(product),
    ))
}

pub async fn list_by_category(
    state: &AppState,
    category_id: Uuid,
) -> AppResult<ApiResponse<ProductList>> {
    let items = Products::find()
        .filter(Column::CategoryId.eq(category_id))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Products", ProductList { items }))
}

/// Reported listings for the moderation queue, least-reported first.
pub async fn list_reported(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
) -> AppResult<ApiResponse<ProductList>> {
    authorize_admin(state, user, uid).await?;

    let items = Products::find()
        .filter(Column::Reported.eq(true))
        .order_by_asc(Column::ReportCount)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Reported products", ProductList { items }))
}

pub async fn list_promoted(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = Products::find()
        .filter(Column::Promote.eq(true))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ApiResponse::success("Promoted products", ProductList { items }))
}

/// Report a listing. The counter increments in the database so concurrent
/// reports cannot overwrite each other.
pub async fn report_product(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<Product>> {
    ensure_owner(user, uid)?;

    let result = Products::update_many()
        .col_expr(Column::Reported, Expr::value(true))
        .col_expr(Column::ReportCount, Expr::col(Column::ReportCount).add(1))
        .filter(Column::Id.eq(id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(
        "Product reported",
        product_from_entity(product),
    ))
}

pub async fn clear_report(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<Product>> {
    authorize_admin(state, user, uid).await?;

    let result = Products::update_many()
        .col_expr(Column::Reported, Expr::value(false))
        .col_expr(Column::ReportCount, Expr::value(0))
        .filter(Column::Id.eq(id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(&user.uid),
        "report_clear",
        Some("products"),
        Some(json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Report cleared",
        product_from_entity(product),
    ))
}

pub async fn delete_own_product(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<MutationSummary>> {
    authorize_seller(state, user, uid).await?;

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Product deleted",
        MutationSummary {
            rows_affected: result.rows_affected,
        },
    ))
}

pub async fn delete_reported_product(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<MutationSummary>> {
    authorize_admin(state, user, uid).await?;

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(&user.uid),
        "reported_product_delete",
        Some("products"),
        Some(json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product deleted",
        MutationSummary {
            rows_affected: result.rows_affected,
        },
    ))
}

pub async fn promote_product(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<Product>> {
    authorize_seller(state, user, uid).await?;

    let result = Products::update_many()
        .col_expr(Column::Promote, Expr::value(true))
        .filter(Column::Id.eq(id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(
        "Product promoted",
        product_from_entity(product),
    ))
}

pub(crate) fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        seller_uid: model.seller_uid,
        category_id: model.category_id,
        name: model.name,
        description: model.description,
        resell_price: model.resell_price,
        reported: model.reported,
        report_count: model.report_count,
        promote: model.promote,
        order_status: model.order_status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
