use crate::{
    abstract_trait::BranchRepositoryTrait,
    domain::requests::{CreateBranchRequest, UpdateBranchRequest},
    model::Branch,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct BranchRepository {
    crud: PgCrudRepository<Branch>,
}

impl BranchRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl BranchRepositoryTrait for BranchRepository {
    async fn find_all(&self) -> Result<Vec<Branch>, RepositoryError> {
        info!("🔍 Fetching all branches");
        self.crud.find_all().await
    }

    async fn find_by_key(&self, key: (i32, i32)) -> Result<Option<Branch>, RepositoryError> {
        self.crud.find_by_key(&key).await
    }

    async fn find_by_retail(&self, retail_id: i32) -> Result<Vec<Branch>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 ORDER BY branch_id",
            Branch::COLUMNS,
            Branch::TABLE
        );

        let rows = sqlx::query_as::<_, Branch>(&sql)
            .bind(retail_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_name_in_retail(
        &self,
        retail_id: i32,
        name: &str,
    ) -> Result<Option<Branch>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 AND branch_name = $2",
            Branch::COLUMNS,
            Branch::TABLE
        );

        let row = sqlx::query_as::<_, Branch>(&sql)
            .bind(retail_id)
            .bind(name)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(
        &self,
        branch_id: i32,
        req: &CreateBranchRequest,
    ) -> Result<Branch, RepositoryError> {
        info!(
            "🏬 Creating branch '{}' for retail id={}",
            req.branch_name, req.retail_id
        );

        let sql = format!(
            "INSERT INTO {} (branch_id, retail_id, branch_name, branch_postal_code, \
             branch_city, branch_address, branch_province_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            Branch::TABLE,
            Branch::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let branch = sqlx::query_as::<_, Branch>(&sql)
            .bind(branch_id)
            .bind(req.retail_id)
            .bind(&req.branch_name)
            .bind(&req.branch_postal_code)
            .bind(&req.branch_city)
            .bind(&req.branch_address)
            .bind(&req.branch_province_code)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert branch: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(branch)
    }

    async fn update(
        &self,
        key: (i32, i32),
        req: &UpdateBranchRequest,
    ) -> Result<Branch, RepositoryError> {
        info!("✏️ Updating branch id={} retail id={}", key.0, key.1);

        let sql = format!(
            "UPDATE {} SET branch_name = $3, branch_postal_code = $4, branch_city = $5, \
             branch_address = $6, branch_province_code = $7 \
             WHERE branch_id = $1 AND retail_id = $2 RETURNING {}",
            Branch::TABLE,
            Branch::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let branch = sqlx::query_as::<_, Branch>(&sql)
            .bind(key.0)
            .bind(key.1)
            .bind(&req.branch_name)
            .bind(&req.branch_postal_code)
            .bind(&req.branch_city)
            .bind(&req.branch_address)
            .bind(&req.branch_province_code)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(branch)
    }

    async fn delete(&self, key: (i32, i32)) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting branch id={} retail id={}", key.0, key.1);
        self.crud.delete_by_key(&key).await
    }
}
