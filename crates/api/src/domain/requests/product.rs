use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(range(min = 1, message = "Sub category id must be positive"))]
    pub sub_category_id: i32,
    #[validate(length(min = 1, message = "Product SKU is required"))]
    pub product_sku: String,
    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,
    pub product_code_bar: Option<String>,
    pub product_image: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(range(min = 1, message = "Sub category id must be positive"))]
    pub sub_category_id: i32,
    #[validate(length(min = 1, message = "Product SKU is required"))]
    pub product_sku: String,
    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,
    pub product_code_bar: Option<String>,
    pub product_image: Option<String>,
}
