use crate::{
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        response::ApiResponse,
    },
    model::User,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError>;
    async fn create(
        &self,
        name: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError>;
    /// Patch; `None` fields keep their stored value. The password, when
    /// present, is already hashed.
    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        password_hash: Option<&str>,
        role: Option<&str>,
    ) -> Result<User, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn get_users(&self) -> Result<ApiResponse<Vec<User>>, ServiceError>;
    async fn get_user(&self, id: i32) -> Result<ApiResponse<User>, ServiceError>;
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<User>, ServiceError>;
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<User>, ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
