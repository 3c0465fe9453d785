use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    #[validate(range(min = 1, message = "Retail id must be positive"))]
    pub retail_id: i32,
    #[validate(length(min = 1, message = "Branch name is required"))]
    pub branch_name: String,
    pub branch_postal_code: Option<String>,
    pub branch_city: Option<String>,
    pub branch_address: Option<String>,
    pub branch_province_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    #[validate(length(min = 1, message = "Branch name is required"))]
    pub branch_name: String,
    pub branch_postal_code: Option<String>,
    pub branch_city: Option<String>,
    pub branch_address: Option<String>,
    pub branch_province_code: Option<String>,
}
