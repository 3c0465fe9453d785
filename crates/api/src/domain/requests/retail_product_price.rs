use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePriceRequest {
    #[validate(range(min = 1, message = "Retail id must be positive"))]
    pub retail_id: i32,
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: i32,
    pub price: Decimal,
    pub date_from: DateTime<Utc>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriceRequest {
    pub price: Decimal,
    pub date_to: Option<DateTime<Utc>>,
}

/// `date` is parsed by hand so a malformed value yields a 400 instead of
/// axum's default query rejection.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPriceQuery {
    pub date: Option<String>,
}
