use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest},
    entity::categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
    error::AppResult,
    middleware::auth::{AuthUser, Role, ensure_role},
    models::Category,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = Categories::find()
        .order_by_asc(Column::CategoryName)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    Ok(ApiResponse::success("Categories", CategoryList { items }))
}

// Category creation carries no uid in the path, so the gate stops after the
// role check.
pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_role(state, user, Role::Seller).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        category_name: Set(payload.category_name),
    };
    let category = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Category created",
        category_from_entity(category),
    ))
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        category_name: model.category_name,
    }
}
