use crate::{
    abstract_trait::{BranchServiceTrait, DynBranchRepository, DynRetailRepository},
    domain::{
        requests::{CreateBranchRequest, UpdateBranchRequest},
        response::ApiResponse,
    },
    model::Branch,
};
use async_trait::async_trait;
use rand::Rng;
use shared::errors::ServiceError;

/// Branch ids are assigned in a reserved band well above anything a
/// retailer's own numbering would use.
const BRANCH_ID_BASE: i32 = 9_000_000;

pub struct BranchService {
    repository: DynBranchRepository,
    retail_repository: DynRetailRepository,
}

impl BranchService {
    pub fn new(repository: DynBranchRepository, retail_repository: DynRetailRepository) -> Self {
        Self {
            repository,
            retail_repository,
        }
    }

    async fn ensure_retail_exists(&self, retail_id: i32) -> Result<(), ServiceError> {
        self.retail_repository
            .find_by_id(retail_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;
        Ok(())
    }

    fn next_branch_id() -> i32 {
        BRANCH_ID_BASE + rand::rng().random_range(0..1_000_000)
    }
}

#[async_trait]
impl BranchServiceTrait for BranchService {
    async fn get_branches(&self) -> Result<ApiResponse<Vec<Branch>>, ServiceError> {
        let branches = self.repository.find_all().await?;
        if branches.is_empty() {
            return Err(ServiceError::not_found("No branches found"));
        }
        Ok(ApiResponse::ok("Branches retrieved successfully", branches))
    }

    async fn get_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
    ) -> Result<ApiResponse<Branch>, ServiceError> {
        let branch = self
            .repository
            .find_by_key((branch_id, retail_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Branch not found"))?;
        Ok(ApiResponse::ok("Branch retrieved successfully", branch))
    }

    async fn get_branches_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<Branch>>, ServiceError> {
        self.ensure_retail_exists(retail_id).await?;

        let branches = self.repository.find_by_retail(retail_id).await?;
        if branches.is_empty() {
            return Err(ServiceError::not_found("No branches found for this retail"));
        }
        Ok(ApiResponse::ok("Branches retrieved successfully", branches))
    }

    async fn create_branch(
        &self,
        req: &CreateBranchRequest,
    ) -> Result<ApiResponse<Branch>, ServiceError> {
        self.ensure_retail_exists(req.retail_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_name_in_retail(req.retail_id, &req.branch_name)
            .await?
        {
            return Err(ServiceError::conflict(
                "Branch with this name already exists for the retail",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let branch = self.repository.create(Self::next_branch_id(), req).await?;
        Ok(ApiResponse::ok("Branch created successfully", branch))
    }

    async fn update_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
        req: &UpdateBranchRequest,
    ) -> Result<ApiResponse<Branch>, ServiceError> {
        self.repository
            .find_by_key((branch_id, retail_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Branch not found"))?;

        if let Some(existing) = self
            .repository
            .find_by_name_in_retail(retail_id, &req.branch_name)
            .await?
            && existing.branch_id != branch_id
        {
            return Err(ServiceError::conflict(
                "Branch with this name already exists for the retail",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let branch = self.repository.update((branch_id, retail_id), req).await?;
        Ok(ApiResponse::ok("Branch updated successfully", branch))
    }

    async fn delete_branch(
        &self,
        branch_id: i32,
        retail_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete((branch_id, retail_id)).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Branch not found"));
        }
        Ok(ApiResponse::message("Branch deleted successfully"))
    }
}
