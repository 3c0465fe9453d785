use crate::{
    abstract_trait::RetailProductAvailabilityRepositoryTrait,
    domain::requests::{CreateAvailabilityRequest, UpdateAvailabilityRequest},
    model::RetailProductAvailability,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct RetailProductAvailabilityRepository {
    crud: PgCrudRepository<RetailProductAvailability>,
}

impl RetailProductAvailabilityRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl RetailProductAvailabilityRepositoryTrait for RetailProductAvailabilityRepository {
    async fn find_all(&self) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
        info!("🔍 Fetching all retail product availabilities");
        self.crud.find_all().await
    }

    async fn find_by_key(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<Option<RetailProductAvailability>, RepositoryError> {
        self.crud.find_by_key(&key).await
    }

    async fn find_by_retail(
        &self,
        retail_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 ORDER BY product_id, date_from",
            RetailProductAvailability::COLUMNS,
            RetailProductAvailability::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(retail_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE product_id = $1 ORDER BY retail_id, date_from",
            RetailProductAvailability::COLUMNS,
            RetailProductAvailability::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(product_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 AND product_id = $2 ORDER BY date_from",
            RetailProductAvailability::COLUMNS,
            RetailProductAvailability::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(retail_id)
            .bind(product_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_current(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<RetailProductAvailability>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE retail_id = $1 AND product_id = $2 \
               AND date_from <= $3 AND (date_to IS NULL OR date_to >= $3) \
             ORDER BY date_from DESC LIMIT 1",
            RetailProductAvailability::COLUMNS,
            RetailProductAvailability::TABLE
        );

        let row = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(retail_id)
            .bind(product_id)
            .bind(as_of)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    /// Intervals overlapping [start, end]; an open interval overlaps
    /// whenever it starts on or before `end`.
    async fn find_in_range(
        &self,
        retail_id: i32,
        product_id: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<RetailProductAvailability>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE retail_id = $1 AND product_id = $2 \
               AND date_from <= $4 AND (date_to IS NULL OR date_to >= $3) \
             ORDER BY date_from",
            RetailProductAvailability::COLUMNS,
            RetailProductAvailability::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(retail_id)
            .bind(product_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn create(
        &self,
        req: &CreateAvailabilityRequest,
    ) -> Result<RetailProductAvailability, RepositoryError> {
        info!(
            "📅 Creating availability for retail id={} product id={} from {}",
            req.retail_id, req.product_id, req.date_from
        );

        let sql = format!(
            "INSERT INTO {} (retail_id, product_id, date_from, date_to) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            RetailProductAvailability::TABLE,
            RetailProductAvailability::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let availability = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(req.retail_id)
            .bind(req.product_id)
            .bind(req.date_from)
            .bind(req.date_to)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert availability: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(availability)
    }

    async fn update(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdateAvailabilityRequest,
    ) -> Result<RetailProductAvailability, RepositoryError> {
        info!(
            "✏️ Updating availability for retail id={} product id={} from {}",
            key.0, key.1, key.2
        );

        let sql = format!(
            "UPDATE {} SET date_to = $4 \
             WHERE retail_id = $1 AND product_id = $2 AND date_from = $3 RETURNING {}",
            RetailProductAvailability::TABLE,
            RetailProductAvailability::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let availability = sqlx::query_as::<_, RetailProductAvailability>(&sql)
            .bind(key.0)
            .bind(key.1)
            .bind(key.2)
            .bind(req.date_to)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(availability)
    }

    async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError> {
        info!(
            "🗑️ Deleting availability for retail id={} product id={} from {}",
            key.0, key.1, key.2
        );
        self.crud.delete_by_key(&key).await
    }
}
