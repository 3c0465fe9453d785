use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetailRequest {
    #[validate(length(min = 1, message = "Retail name is required"))]
    pub retail_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRetailRequest {
    #[validate(length(min = 1, message = "Retail name is required"))]
    pub retail_name: String,
}
