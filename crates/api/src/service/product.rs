use crate::{
    abstract_trait::{DynProductRepository, DynSubCategoryRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ApiResponse,
    },
    model::Product,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct ProductService {
    repository: DynProductRepository,
    sub_category_repository: DynSubCategoryRepository,
}

impl ProductService {
    pub fn new(
        repository: DynProductRepository,
        sub_category_repository: DynSubCategoryRepository,
    ) -> Self {
        Self {
            repository,
            sub_category_repository,
        }
    }

    async fn ensure_sub_category_exists(&self, sub_category_id: i32) -> Result<(), ServiceError> {
        self.sub_category_repository
            .find_by_id(sub_category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sub category not found"))?;
        Ok(())
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_products(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        let products = self.repository.find_all().await?;
        if products.is_empty() {
            return Err(ServiceError::not_found("No products found"));
        }
        Ok(ApiResponse::ok("Products retrieved successfully", products))
    }

    async fn get_product(&self, id: i32) -> Result<ApiResponse<Product>, ServiceError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product not found"))?;
        Ok(ApiResponse::ok("Product retrieved successfully", product))
    }

    async fn get_products_of_sub_category(
        &self,
        sub_category_id: i32,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        self.ensure_sub_category_exists(sub_category_id).await?;

        let products = self.repository.find_by_sub_category(sub_category_id).await?;
        if products.is_empty() {
            return Err(ServiceError::not_found(
                "No products found for this sub category",
            ));
        }
        Ok(ApiResponse::ok("Products retrieved successfully", products))
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        self.ensure_sub_category_exists(req.sub_category_id).await?;

        if let Some(existing) = self.repository.find_by_sku(&req.product_sku).await? {
            return Err(ServiceError::conflict(
                "Product with this SKU already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let product = self.repository.create(req).await?;
        Ok(ApiResponse::ok("Product created successfully", product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product not found"))?;
        self.ensure_sub_category_exists(req.sub_category_id).await?;

        if let Some(existing) = self.repository.find_by_sku(&req.product_sku).await?
            && existing.product_id != id
        {
            return Err(ServiceError::conflict(
                "Product with this SKU already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let product = self.repository.update(id, req).await?;
        Ok(ApiResponse::ok("Product updated successfully", product))
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Product not found"));
        }
        Ok(ApiResponse::message("Product deleted successfully"))
    }
}
