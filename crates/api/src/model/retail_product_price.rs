use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::repository::PgEntity;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Price of a product at a retailer during a validity interval.
/// `date_to = None` means the price is still in effect.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetailProductPrice {
    pub retail_id: i32,
    pub product_id: i32,
    pub date_from: DateTime<Utc>,
    pub price: Decimal,
    pub date_to: Option<DateTime<Utc>>,
}

impl PgEntity for RetailProductPrice {
    type Key = (i32, i32, DateTime<Utc>);

    const TABLE: &'static str = "retail_product_prices";
    const COLUMNS: &'static str = "retail_id, product_id, date_from, price, date_to";
    const KEY_COLUMNS: &'static [&'static str] = &["retail_id", "product_id", "date_from"];
}
