use crate::{
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::ApiResponse,
    },
    model::Category,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn get_categories(&self) -> Result<ApiResponse<Vec<Category>>, ServiceError>;
    async fn get_category(&self, id: i32) -> Result<ApiResponse<Category>, ServiceError>;
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<Category>, ServiceError>;
    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<Category>, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
