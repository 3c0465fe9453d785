use crate::{
    abstract_trait::{
        DynProductRepository, DynRetailProductRepository, DynRetailRepository,
        RetailProductServiceTrait,
    },
    domain::{requests::CreateRetailProductRequest, response::ApiResponse},
    model::RetailProduct,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct RetailProductService {
    repository: DynRetailProductRepository,
    retail_repository: DynRetailRepository,
    product_repository: DynProductRepository,
}

impl RetailProductService {
    pub fn new(
        repository: DynRetailProductRepository,
        retail_repository: DynRetailRepository,
        product_repository: DynProductRepository,
    ) -> Self {
        Self {
            repository,
            retail_repository,
            product_repository,
        }
    }
}

#[async_trait]
impl RetailProductServiceTrait for RetailProductService {
    async fn get_retail_products(
        &self,
    ) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError> {
        let retail_products = self.repository.find_all().await?;
        if retail_products.is_empty() {
            return Err(ServiceError::not_found("No retail products found"));
        }
        Ok(ApiResponse::ok(
            "Retail products retrieved successfully",
            retail_products,
        ))
    }

    async fn get_retail_product(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<RetailProduct>, ServiceError> {
        let retail_product = self
            .repository
            .find_by_key((retail_id, product_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail product not found"))?;
        Ok(ApiResponse::ok(
            "Retail product retrieved successfully",
            retail_product,
        ))
    }

    async fn get_products_of_retail(
        &self,
        retail_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError> {
        self.retail_repository
            .find_by_id(retail_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;

        let retail_products = self.repository.find_by_retail(retail_id).await?;
        if retail_products.is_empty() {
            return Err(ServiceError::not_found(
                "No retail products found for this retail",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail products retrieved successfully",
            retail_products,
        ))
    }

    async fn get_retails_of_product(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<RetailProduct>>, ServiceError> {
        self.product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product not found"))?;

        let retail_products = self.repository.find_by_product(product_id).await?;
        if retail_products.is_empty() {
            return Err(ServiceError::not_found(
                "No retail products found for this product",
            ));
        }
        Ok(ApiResponse::ok(
            "Retail products retrieved successfully",
            retail_products,
        ))
    }

    async fn create_retail_product(
        &self,
        req: &CreateRetailProductRequest,
    ) -> Result<ApiResponse<RetailProduct>, ServiceError> {
        self.retail_repository
            .find_by_id(req.retail_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Retail not found"))?;
        self.product_repository
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product not found"))?;

        if let Some(existing) = self
            .repository
            .find_by_key((req.retail_id, req.product_id))
            .await?
        {
            return Err(ServiceError::conflict(
                "Retail product already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let retail_product = self.repository.create(req).await?;
        Ok(ApiResponse::ok(
            "Retail product created successfully",
            retail_product,
        ))
    }

    async fn delete_retail_product(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete((retail_id, product_id)).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Retail product not found"));
        }
        Ok(ApiResponse::message("Retail product deleted successfully"))
    }
}
