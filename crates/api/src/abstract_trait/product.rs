use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ApiResponse,
    },
    model::Product,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_sub_category(
        &self,
        sub_category_id: i32,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn get_products(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn get_product(&self, id: i32) -> Result<ApiResponse<Product>, ServiceError>;
    async fn get_products_of_sub_category(
        &self,
        sub_category_id: i32,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
