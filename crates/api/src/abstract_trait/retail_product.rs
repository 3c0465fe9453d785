use crate::{
    domain::{requests::CreateRetailProductRequest, response::ApiResponse},
    model::RetailProduct,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynRetailProductRepository = Arc<dyn RetailProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<RetailProduct>, RepositoryError>;
    async fn find_by_key(
        &self,
        key: (i32, i32),
    ) -> Result<Option<RetailProduct>, RepositoryError>;
    async fn find_by_retail(&self, retail_id: i32)
    -> Result<Vec<RetailProduct>, RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProduct>, RepositoryError>;
    async fn create(
        &self,
        req: &CreateRetailProductRequest,
    ) -> Result<RetailProduct, RepositoryError>;
    async fn delete(&self, key: (i32, i32)) -> Result<u64, RepositoryError>;
}

pub type DynRetailProductService = Arc<dyn RetailProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductServiceTrait {
    async fn get_retail_products(&self) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError>;
    async fn get_retail_product(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<RetailProduct>, ServiceError>;
    async fn get_products_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError>;
    async fn get_retails_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError>;
    async fn create_retail_product(
        &self,
        req: &CreateRetailProductRequest,
    ) -> Result<ApiResponse<RetailProduct>, ServiceError>;
    async fn delete_retail_product(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
