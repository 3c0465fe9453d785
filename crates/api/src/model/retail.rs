use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Retail {
    pub retail_id: i32,
    pub retail_name: String,
}

impl PgEntity for Retail {
    type Key = i32;

    const TABLE: &'static str = "retails";
    const COLUMNS: &'static str = "retail_id, retail_name";
    const KEY_COLUMNS: &'static [&'static str] = &["retail_id"];
}
