use crate::{
    abstract_trait::CategoryRepositoryTrait,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    model::Category,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    crud: PgCrudRepository<Category>,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        info!("🔍 Fetching all categories");
        self.crud.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        self.crud.find_by_key(&id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE category_name = $1",
            Category::COLUMNS,
            Category::TABLE
        );

        let row = sqlx::query_as::<_, Category>(&sql)
            .bind(name)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        info!("📁 Creating category: {}", req.category_name);

        let sql = format!(
            "INSERT INTO {} (category_name) VALUES ($1) RETURNING {}",
            Category::TABLE,
            Category::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(&req.category_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert category: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(category)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        info!("✏️ Updating category id={id}");

        let sql = format!(
            "UPDATE {} SET category_name = $2 WHERE category_id = $1 RETURNING {}",
            Category::TABLE,
            Category::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .bind(&req.category_name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting category id={id}");
        self.crud.delete_by_key(&id).await
    }
}
