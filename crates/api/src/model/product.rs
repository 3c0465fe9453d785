use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub sub_category_id: i32,
    pub product_sku: String,
    pub product_name: String,
    pub product_code_bar: Option<String>,
    pub product_image: Option<String>,
}

impl PgEntity for Product {
    type Key = i32;

    const TABLE: &'static str = "products";
    const COLUMNS: &'static str =
        "product_id, sub_category_id, product_sku, product_name, product_code_bar, product_image";
    const KEY_COLUMNS: &'static [&'static str] = &["product_id"];
}
