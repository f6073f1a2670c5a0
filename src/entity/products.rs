use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub seller_uid: String,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub resell_price: i64,
    pub reported: bool,
    pub report_count: i32,
    pub promote: bool,
    pub order_status: bool,
    pub created_at: DateTimeWithTimeZone,
}

// Collections are flat documents; nothing enforces references across them.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
