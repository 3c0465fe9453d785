use crate::{
    abstract_trait::{DynCategoryRepository, DynSubCategoryRepository, SubCategoryServiceTrait},
    domain::{
        requests::{CreateSubCategoryRequest, UpdateSubCategoryRequest},
        response::ApiResponse,
    },
    model::SubCategory,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct SubCategoryService {
    repository: DynSubCategoryRepository,
    category_repository: DynCategoryRepository,
}

impl SubCategoryService {
    pub fn new(
        repository: DynSubCategoryRepository,
        category_repository: DynCategoryRepository,
    ) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    async fn ensure_category_exists(&self, category_id: i32) -> Result<(), ServiceError> {
        self.category_repository
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category not found"))?;
        Ok(())
    }
}

#[async_trait]
impl SubCategoryServiceTrait for SubCategoryService {
    async fn get_sub_categories(&self) -> Result<ApiResponse<Vec<SubCategory>>, ServiceError> {
        let sub_categories = self.repository.find_all().await?;
        if sub_categories.is_empty() {
            return Err(ServiceError::not_found("No sub categories found"));
        }
        Ok(ApiResponse::ok(
            "Sub categories retrieved successfully",
            sub_categories,
        ))
    }

    async fn get_sub_category(&self, id: i32) -> Result<ApiResponse<SubCategory>, ServiceError> {
        let sub_category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sub category not found"))?;
        Ok(ApiResponse::ok(
            "Sub category retrieved successfully",
            sub_category,
        ))
    }

    async fn get_sub_categories_of_category(
        &self,
        category_id: i32,
    ) -> Result<ApiResponse<Vec<SubCategory>>, ServiceError> {
        self.ensure_category_exists(category_id).await?;

        let sub_categories = self.repository.find_by_category(category_id).await?;
        if sub_categories.is_empty() {
            return Err(ServiceError::not_found(
                "No sub categories found for this category",
            ));
        }
        Ok(ApiResponse::ok(
            "Sub categories retrieved successfully",
            sub_categories,
        ))
    }

    async fn create_sub_category(
        &self,
        req: &CreateSubCategoryRequest,
    ) -> Result<ApiResponse<SubCategory>, ServiceError> {
        self.ensure_category_exists(req.category_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_name_in_category(req.category_id, &req.sub_category_name)
            .await?
        {
            return Err(ServiceError::conflict(
                "Sub category with this name already exists in the category",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let sub_category = self.repository.create(req).await?;
        Ok(ApiResponse::ok(
            "Sub category created successfully",
            sub_category,
        ))
    }

    async fn update_sub_category(
        &self,
        id: i32,
        req: &UpdateSubCategoryRequest,
    ) -> Result<ApiResponse<SubCategory>, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sub category not found"))?;
        self.ensure_category_exists(req.category_id).await?;

        if let Some(existing) = self
            .repository
            .find_by_name_in_category(req.category_id, &req.sub_category_name)
            .await?
            && existing.sub_category_id != id
        {
            return Err(ServiceError::conflict(
                "Sub category with this name already exists in the category",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let sub_category = self.repository.update(id, req).await?;
        Ok(ApiResponse::ok(
            "Sub category updated successfully",
            sub_category,
        ))
    }

    async fn delete_sub_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Sub category not found"));
        }
        Ok(ApiResponse::message("Sub category deleted successfully"))
    }
}
