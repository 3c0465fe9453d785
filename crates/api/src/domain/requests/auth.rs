use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "userName must not be empty"))]
    pub user_name: String,
    #[validate(length(min = 6, message = "userPassword must be at least 6 characters"))]
    pub user_password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "userName must not be empty"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "userPassword must not be empty"))]
    pub user_password: String,
}
