use crate::{
    domain::{
        requests::{CreateAvailabilityRequest, UpdateAvailabilityRequest},
        response::ApiResponse,
    },
    model::RetailProductAvailability,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynRetailProductAvailabilityRepository =
    Arc<dyn RetailProductAvailabilityRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductAvailabilityRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<RetailProductAvailability>, RepositoryError>;
    async fn find_by_key(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<Option<RetailProductAvailability>, RepositoryError>;
    async fn find_by_retail(
        &self,
        retail_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError>;
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError>;
    async fn find_by_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError>;
    async fn find_current(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<RetailProductAvailability>, RepositoryError>;
    async fn find_in_range(
        &self,
        retail_id: i32,
        product_id: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError>;
    async fn create(
        &self,
        req: &CreateAvailabilityRequest,
    ) -> Result<RetailProductAvailability, RepositoryError>;
    async fn update(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdateAvailabilityRequest,
    ) -> Result<RetailProductAvailability, RepositoryError>;
    async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError>;
}

pub type DynRetailProductAvailabilityService =
    Arc<dyn RetailProductAvailabilityServiceTrait + Send + Sync>;

#[async_trait]
pub trait RetailProductAvailabilityServiceTrait {
    async fn get_availabilities(
        &self,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError>;
    async fn get_availabilities_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError>;
    async fn get_availabilities_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError>;
    async fn get_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError>;
    async fn get_availabilities_of_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError>;
    async fn get_current_availability(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError>;
    async fn get_availabilities_in_range(
        &self,
        retail_id: i32,
        product_id: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<ApiResponse<Vec<RetailProductAvailability>>, ServiceError>;
    async fn create_availability(
        &self,
        req: &CreateAvailabilityRequest,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError>;
    async fn update_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdateAvailabilityRequest,
    ) -> Result<ApiResponse<RetailProductAvailability>, ServiceError>;
    async fn delete_availability(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<ApiResponse<()>, ServiceError>;
}
