use crate::{
    abstract_trait::{DynRetailRepository, RetailServiceTrait},
    domain::{
        requests::{CreateRetailRequest, UpdateRetailRequest},
        response::ApiResponse,
    },
    model::Retail,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct RetailService {
    repository: DynRetailRepository,
}

impl RetailService {
    pub fn new(repository: DynRetailRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RetailServiceTrait for RetailService {
    async fn get_retails(&self) -> Result<ApiResponse<Vec<Retail>>, ServiceError> {
        let retails = self.repository.find_all().await?;
        if retails.is_empty() {
            return Err(ServiceError::not_found("No retails found"));
        }
        Ok(ApiResponse::ok("Retails retrieved successfully", retails))
    }

    async fn get_retail(&self, id: i32) -> Result<ApiResponse<Retail>, ServiceError> {
        let retail = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;
        Ok(ApiResponse::ok("Retail retrieved successfully", retail))
    }

    async fn create_retail(
        &self,
        req: &CreateRetailRequest,
    ) -> Result<ApiResponse<Retail>, ServiceError> {
        if let Some(existing) = self.repository.find_by_name(&req.retail_name).await? {
            return Err(ServiceError::conflict(
                "Retail with this name already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let retail = self.repository.create(req).await?;
        Ok(ApiResponse::ok("Retail created successfully", retail))
    }

    async fn update_retail(
        &self,
        id: i32,
        req: &UpdateRetailRequest,
    ) -> Result<ApiResponse<Retail>, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;

        if let Some(existing) = self.repository.find_by_name(&req.retail_name).await?
            && existing.retail_id != id
        {
            return Err(ServiceError::conflict(
                "Retail with this name already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let retail = self.repository.update(id, req).await?;
        Ok(ApiResponse::ok("Retail updated successfully", retail))
    }

    async fn delete_retail(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Retail not found"));
        }
        Ok(ApiResponse::message("Retail deleted successfully"))
    }
}
