use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Blog;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogList {
    pub items: Vec<Blog>,
}
