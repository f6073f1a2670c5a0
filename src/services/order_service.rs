use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    entity::orders::{ActiveModel, Column, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::Order,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_for_customer(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
) -> AppResult<ApiResponse<OrderList>> {
    ensure_owner(user, uid)?;

    let items = Orders::find()
        .filter(Column::CustomerUid.eq(uid))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    Ok(ApiResponse::success("Orders", OrderList { items }))
}

pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    ensure_owner(user, uid)?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        customer_uid: Set(uid.to_string()),
        product_id: Set(payload.product_id),
        meeting_location: Set(payload.meeting_location),
        phone: Set(payload.phone),
        order_status: Set(false),
        created_at: NotSet,
    };
    let order = active.insert(&state.orm).await?;

    Ok(ApiResponse::success("Order created", order_from_entity(order)))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    uid: &str,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    ensure_owner(user, uid)?;

    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success("Order", order_from_entity(order)))
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_uid: model.customer_uid,
        product_id: model.product_id,
        meeting_location: model.meeting_location,
        phone: model.phone,
        order_status: model.order_status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
