use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvailabilityRequest {
    #[validate(range(min = 1, message = "Retail id must be positive"))]
    pub retail_id: i32,
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: i32,
    pub date_from: DateTime<Utc>,
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub date_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAvailabilityQuery {
    pub date: Option<String>,
}
