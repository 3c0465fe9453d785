use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryRequest {
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category_id: i32,
    #[validate(length(min = 1, message = "Sub category name is required"))]
    pub sub_category_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubCategoryRequest {
    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category_id: i32,
    #[validate(length(min = 1, message = "Sub category name is required"))]
    pub sub_category_name: String,
}
