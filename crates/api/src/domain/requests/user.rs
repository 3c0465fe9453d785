use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "userName must not be empty"))]
    pub user_name: String,
    #[validate(length(min = 6, message = "userPassword must be at least 6 characters"))]
    pub user_password: String,
    #[validate(length(min = 1, message = "userRole must not be empty"))]
    pub user_role: String,
}

/// Partial update; at least one field must be present.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "userName must not be empty"))]
    pub user_name: Option<String>,
    #[validate(length(min = 6, message = "userPassword must be at least 6 characters"))]
    pub user_password: Option<String>,
    pub user_role: Option<String>,
}
