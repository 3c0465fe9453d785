use crate::{
    domain::{
        requests::{CreateBranchRequest, UpdateBranchRequest},
        response::ApiResponse,
    },
    model::Branch,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynBranchRepository = Arc<dyn BranchRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BranchRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Branch>, RepositoryError>;
    async fn find_by_key(&self, key: (i32, i32)) -> Result<Option<Branch>, RepositoryError>;
    async fn find_by_retail(&self, retail_id: i32) -> Result<Vec<Branch>, RepositoryError>;
    async fn find_by_name_in_retail(
        &self,
        retail_id: i32,
        name: &str,
    ) -> Result<Option<Branch>, RepositoryError>;
    async fn create(
        &self,
        branch_id: i32,
        req: &CreateBranchRequest,
    ) -> Result<Branch, RepositoryError>;
    async fn update(
        &self,
        key: (i32, i32),
        req: &UpdateBranchRequest,
    ) -> Result<Branch, RepositoryError>;
    async fn delete(&self, key: (i32, i32)) -> Result<u64, RepositoryError>;
}

pub type DynBranchService = Arc<dyn BranchServiceTrait + Send + Sync>;

#[async_trait]
pub trait BranchServiceTrait {
    async fn get_branches(&self) -> Result<ApiResponse<Vec<Branch>>, ServiceError>;
    async fn get_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
    ) -> Result<ApiResponse<Branch>, ServiceError>;
    async fn get_branches_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<Branch>>, ServiceError>;
    async fn create_branch(
        &self,
        req: &CreateBranchRequest,
    ) -> Result<ApiResponse<Branch>, ServiceError>;
    async fn update_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
        req: &UpdateBranchRequest,
    ) -> Result<ApiResponse<Branch>, ServiceError>;
    async fn delete_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
