use crate::{
    abstract_trait::SubCategoryRepositoryTrait,
    domain::requests::{CreateSubCategoryRequest, UpdateSubCategoryRequest},
    model::SubCategory,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct SubCategoryRepository {
    crud: PgCrudRepository<SubCategory>,
}

impl SubCategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl SubCategoryRepositoryTrait for SubCategoryRepository {
    async fn find_all(&self) -> Result<Vec<SubCategory>, RepositoryError> {
        info!("🔍 Fetching all sub categories");
        self.crud.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SubCategory>, RepositoryError> {
        self.crud.find_by_key(&id).await
    }

    async fn find_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<SubCategory>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE category_id = $1 ORDER BY sub_category_id",
            SubCategory::COLUMNS,
            SubCategory::TABLE
        );

        let rows = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(category_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_name_in_category(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Option<SubCategory>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE category_id = $1 AND sub_category_name = $2",
            SubCategory::COLUMNS,
            SubCategory::TABLE
        );

        let row = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(category_id)
            .bind(name)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(
        &self,
        req: &CreateSubCategoryRequest,
    ) -> Result<SubCategory, RepositoryError> {
        info!(
            "📂 Creating sub category '{}' under category id={}",
            req.sub_category_name, req.category_id
        );

        let sql = format!(
            "INSERT INTO {} (category_id, sub_category_name) VALUES ($1, $2) RETURNING {}",
            SubCategory::TABLE,
            SubCategory::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let sub_category = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(req.category_id)
            .bind(&req.sub_category_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert sub category: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(sub_category)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateSubCategoryRequest,
    ) -> Result<SubCategory, RepositoryError> {
        info!("✏️ Updating sub category id={id}");

        let sql = format!(
            "UPDATE {} SET category_id = $2, sub_category_name = $3 \
             WHERE sub_category_id = $1 RETURNING {}",
            SubCategory::TABLE,
            SubCategory::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let sub_category = sqlx::query_as::<_, SubCategory>(&sql)
            .bind(id)
            .bind(req.category_id)
            .bind(&req.sub_category_name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(sub_category)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting sub category id={id}");
        self.crud.delete_by_key(&id).await
    }
}
