use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::blogs::{BlogList, CreateBlogRequest},
    entity::blogs::{ActiveModel, Column, Entity as Blogs, Model as BlogModel},
    error::AppResult,
    models::Blog,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_blogs(state: &AppState) -> AppResult<ApiResponse<BlogList>> {
    let items = Blogs::find()
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(blog_from_entity)
        .collect();

    Ok(ApiResponse::success("Blogs", BlogList { items }))
}

pub async fn create_blog(
    state: &AppState,
    payload: CreateBlogRequest,
) -> AppResult<ApiResponse<Blog>> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        content: Set(payload.content),
        author: Set(payload.author),
        created_at: NotSet,
    };
    let blog = active.insert(&state.orm).await?;

    Ok(ApiResponse::success("Blog created", blog_from_entity(blog)))
}

fn blog_from_entity(model: BlogModel) -> Blog {
    Blog {
        id: model.id,
        title: model.title,
        content: model.content,
        author: model.author,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
