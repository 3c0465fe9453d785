use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Marks that a retailer carries a product at all; the precondition for
/// any price or availability record on the pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetailProduct {
    pub retail_id: i32,
    pub product_id: i32,
}

impl PgEntity for RetailProduct {
    type Key = (i32, i32);

    const TABLE: &'static str = "retail_products";
    const COLUMNS: &'static str = "retail_id, product_id";
    const KEY_COLUMNS: &'static [&'static str] = &["retail_id", "product_id"];
}
