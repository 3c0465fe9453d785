use crate::{
    abstract_trait::RetailRepositoryTrait,
    domain::requests::{CreateRetailRequest, UpdateRetailRequest},
    model::Retail,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct RetailRepository {
    crud: PgCrudRepository<Retail>,
}

impl RetailRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl RetailRepositoryTrait for RetailRepository {
    async fn find_all(&self) -> Result<Vec<Retail>, RepositoryError> {
        info!("🔍 Fetching all retails");
        self.crud.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Retail>, RepositoryError> {
        self.crud.find_by_key(&id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Retail>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_name = $1",
            Retail::COLUMNS,
            Retail::TABLE
        );

        let row = sqlx::query_as::<_, Retail>(&sql)
            .bind(name)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(&self, req: &CreateRetailRequest) -> Result<Retail, RepositoryError> {
        info!("🏪 Creating retail: {}", req.retail_name);

        let sql = format!(
            "INSERT INTO {} (retail_name) VALUES ($1) RETURNING {}",
            Retail::TABLE,
            Retail::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let retail = sqlx::query_as::<_, Retail>(&sql)
            .bind(&req.retail_name)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert retail: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(retail)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateRetailRequest,
    ) -> Result<Retail, RepositoryError> {
        info!("✏️ Updating retail id={id}");

        let sql = format!(
            "UPDATE {} SET retail_name = $2 WHERE retail_id = $1 RETURNING {}",
            Retail::TABLE,
            Retail::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let retail = sqlx::query_as::<_, Retail>(&sql)
            .bind(id)
            .bind(&req.retail_name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(retail)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting retail id={id}");
        self.crud.delete_by_key(&id).await
    }
}
