use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub sub_category_id: i32,
    pub category_id: i32,
    pub sub_category_name: String,
}

impl PgEntity for SubCategory {
    type Key = i32;

    const TABLE: &'static str = "sub_categories";
    const COLUMNS: &'static str = "sub_category_id, category_id, sub_category_name";
    const KEY_COLUMNS: &'static [&'static str] = &["sub_category_id"];
}
