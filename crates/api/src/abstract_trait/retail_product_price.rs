use crate::{
    domain::{
        requests::{CreatePriceRequest, UpdatePriceRequest},
        response::ApiResponse,
    },
    model::RetailProductPrice,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynRetailProductPriceRepository =
    Arc<dyn RetailProductPriceRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductPriceRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<RetailProductPrice>, RepositoryError>;
    async fn find_by_key(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<Option<RetailProductPrice>, RepositoryError>;
    async fn find_by_retail(
        &self,
        retail_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError>;
    async fn find_by_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError>;
    async fn find_current(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<RetailProductPrice>, RepositoryError>;
    async fn create(
        &self,
        req: &CreatePriceRequest,
    ) -> Result<RetailProductPrice, RepositoryError>;
    async fn update(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdatePriceRequest,
    ) -> Result<RetailProductPrice, RepositoryError>;
    async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError>;
}

pub type DynRetailProductPriceService = Arc<dyn RetailProductPriceServiceTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductPriceServiceTrait {
    async fn get_prices(&self) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError>;
    async fn get_prices_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError>;
    async fn get_prices_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError>;
    async fn get_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError>;
    async fn get_prices_of_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductPrice>>, ServiceError>;
    async fn get_current_price(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError>;
    async fn create_price(
        &self,
        req: &CreatePriceRequest,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError>;
    async fn update_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdatePriceRequest,
    ) -> Result<ApiResponse<RetailProductPrice>, ServiceError>;
    async fn delete_price(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<()>, ServiceError>;
}
