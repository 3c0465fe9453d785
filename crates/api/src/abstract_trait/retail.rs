use crate::{
    domain::{
        requests::{CreateRetailRequest, UpdateRetailRequest},
        response::ApiResponse,
    },
    model::Retail,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynRetailRepository = Arc<dyn RetailRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RetailRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Retail>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Retail>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Retail>, RepositoryError>;
    async fn create(&self, req: &CreateRetailRequest) -> Result<Retail, RepositoryError>;
    async fn update(&self, id: i32, req: &UpdateRetailRequest)
    -> Result<Retail, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

pub type DynRetailService = Arc<dyn RetailServiceTrait + Send + Sync>;

#[async_trait]
pub trait RetailServiceTrait {
    async fn get_retails(&self) -> Result<ApiResponse<Vec<Retail>>, ServiceError>;
    async fn get_retail(&self, id: i32) -> Result<ApiResponse<Retail>, ServiceError>;
    async fn create_retail(
        &self,
        req: &CreateRetailRequest,
    ) -> Result<ApiResponse<Retail>, ServiceError>;
    async fn update_retail(
        &self,
        id: i32,
        req: &UpdateRetailRequest,
    ) -> Result<ApiResponse<Retail>, ServiceError>;
    async fn delete_retail(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
