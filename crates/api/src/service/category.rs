use crate::{
    abstract_trait::{CategoryServiceTrait, DynCategoryRepository},
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::ApiResponse,
    },
    model::Category,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self) -> Result<ApiResponse<Vec<Category>>, ServiceError> {
        let categories = self.repository.find_all().await?;
        if categories.is_empty() {
            return Err(ServiceError::not_found("No categories found"));
        }
        Ok(ApiResponse::ok(
            "Categories retrieved successfully",
            categories,
        ))
    }

    async fn get_category(&self, id: i32) -> Result<ApiResponse<Category>, ServiceError> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category not found"))?;
        Ok(ApiResponse::ok("Category retrieved successfully", category))
    }

    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<Category>, ServiceError> {
        if let Some(existing) = self.repository.find_by_name(&req.category_name).await? {
            return Err(ServiceError::conflict(
                "Category with this name already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let category = self.repository.create(req).await?;
        Ok(ApiResponse::ok("Category created successfully", category))
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<Category>, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category not found"))?;

        if let Some(existing) = self.repository.find_by_name(&req.category_name).await?
            && existing.category_id != id
        {
            return Err(ServiceError::conflict(
                "Category with this name already exists",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let category = self.repository.update(id, req).await?;
        Ok(ApiResponse::ok("Category updated successfully", category))
    }

    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("Category not found"));
        }
        Ok(ApiResponse::message("Category deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::CategoryRepositoryTrait;
    use shared::errors::RepositoryError;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryCategoryRepository {
        rows: Mutex<Vec<Category>>,
    }

    impl InMemoryCategoryRepository {
        fn with(rows: Vec<Category>) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(rows),
            })
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for InMemoryCategoryRepository {
        async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.category_id == id)
                .cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.category_name == name)
                .cloned())
        }

        async fn create(
            &self,
            req: &CreateCategoryRequest,
        ) -> Result<Category, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|c| c.category_id).max().unwrap_or(0) + 1;
            let category = Category {
                category_id: id,
                category_name: req.category_name.clone(),
            };
            rows.push(category.clone());
            Ok(category)
        }

        async fn update(
            &self,
            id: i32,
            req: &UpdateCategoryRequest,
        ) -> Result<Category, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let category = rows
                .iter_mut()
                .find(|c| c.category_id == id)
                .ok_or(RepositoryError::NotFound)?;
            category.category_name = req.category_name.clone();
            Ok(category.clone())
        }

        async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.category_id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            category_id: id,
            category_name: name.into(),
        }
    }

    #[tokio::test]
    async fn empty_listing_is_not_found() {
        let service = CategoryService::new(InMemoryCategoryRepository::with(vec![]));
        let err = service.get_categories().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict_with_the_existing_record() {
        let service = CategoryService::new(InMemoryCategoryRepository::with(vec![category(
            1, "Dairy",
        )]));

        let err = service
            .create_category(&CreateCategoryRequest {
                category_name: "Dairy".into(),
            })
            .await
            .unwrap_err();

        match err {
            ServiceError::Conflict { details, .. } => {
                assert!(details.unwrap().contains("Dairy"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_keeps_its_own_name_without_conflict() {
        let service = CategoryService::new(InMemoryCategoryRepository::with(vec![category(
            1, "Dairy",
        )]));

        let res = service
            .update_category(
                1,
                &UpdateCategoryRequest {
                    category_name: "Dairy".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(res.data.unwrap().category_name, "Dairy");
    }

    #[tokio::test]
    async fn deleting_a_missing_category_is_not_found() {
        let service = CategoryService::new(InMemoryCategoryRepository::with(vec![]));
        let err = service.delete_category(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
