use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

impl PgEntity for Category {
    type Key = i32;

    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "category_id, category_name";
    const KEY_COLUMNS: &'static [&'static str] = &["category_id"];
}
