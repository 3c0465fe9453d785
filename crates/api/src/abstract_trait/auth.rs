use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        response::ApiResponse,
    },
    model::User,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register_user(&self, req: &RegisterRequest)
    -> Result<ApiResponse<User>, ServiceError>;
    async fn login_user(&self, req: &LoginRequest) -> Result<ApiResponse<String>, ServiceError>;
}
