use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetailProductRequest {
    #[validate(range(min = 1, message = "Retail id must be positive"))]
    pub retail_id: i32,
    #[validate(range(min = 1, message = "Product id must be positive"))]
    pub product_id: i32,
}
