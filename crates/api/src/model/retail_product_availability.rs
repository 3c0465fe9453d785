use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Whether a product is stocked at a retailer during a validity interval.
/// Same key shape as the price history, minus the price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetailProductAvailability {
    pub retail_id: i32,
    pub product_id: i32,
    pub date_from: DateTime<Utc>,
    pub date_to: Option<DateTime<Utc>>,
}

impl PgEntity for RetailProductAvailability {
    type Key = (i32, i32, DateTime<Utc>);

    const TABLE: &'static str = "retail_product_availabilities";
    const COLUMNS: &'static str = "retail_id, product_id, date_from, date_to";
    const KEY_COLUMNS: &'static [&'static str] = &["retail_id", "product_id", "date_from"];
}
