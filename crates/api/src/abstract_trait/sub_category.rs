use crate::{
    domain::{
        requests::{CreateSubCategoryRequest, UpdateSubCategoryRequest},
        response::ApiResponse,
    },
    model::SubCategory,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynSubCategoryRepository = Arc<dyn SubCategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubCategoryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<SubCategory>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<SubCategory>, RepositoryError>;
    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<SubCategory>, RepositoryError>;
    async fn find_by_name_in_category(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Option<SubCategory>, RepositoryError>;
    async fn create(
        &self,
        req: &CreateSubCategoryRequest,
    ) -> Result<SubCategory, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateSubCategoryRequest,
    ) -> Result<SubCategory, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

pub type DynSubCategoryService = Arc<dyn SubCategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubCategoryServiceTrait {
    async fn get_sub_categories(&self) -> Result<ApiResponse<Vec<SubCategory>>, ServiceError>;
    async fn get_sub_category(&self, id: i32) -> Result<ApiResponse<SubCategory>, ServiceError>;
    async fn get_sub_categories_of_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<SubCategory>>, ServiceError>;
    async fn create_sub_category(
        &self,
        req: &CreateSubCategoryRequest,
    ) -> Result<ApiResponse<SubCategory>, ServiceError>;
    async fn update_sub_category(
        &self,
        id: i32,
        req: &UpdateSubCategoryRequest,
    ) -> Result<ApiResponse<SubCategory>, ServiceError>;
    async fn delete_sub_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
