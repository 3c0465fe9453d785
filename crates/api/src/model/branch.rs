use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: i32,
    pub retail_id: i32,
    pub branch_name: String,
    pub branch_postal_code: Option<String>,
    pub branch_city: Option<String>,
    pub branch_address: Option<String>,
    pub branch_province_code: Option<String>,
}

impl PgEntity for Branch {
    type Key = (i32, i32);

    const TABLE: &'static str = "branches";
    const COLUMNS: &'static str = "branch_id, retail_id, branch_name, branch_postal_code, \
         branch_city, branch_address, branch_province_code";
    const KEY_COLUMNS: &'static [&'static str] = &["branch_id", "retail_id"];
}
