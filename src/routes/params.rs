use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Targeted mutations name their document in the query string, `?id=<uuid>`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TargetQuery {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleQuery {
    pub role: String,
}
