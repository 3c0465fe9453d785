use crate::{
    abstract_trait::RetailProductPriceRepositoryTrait,
    domain::requests::{CreatePriceRequest, UpdatePriceRequest},
    model::RetailProductPrice,
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
pub struct RetailProductPriceRepository {
    crud: PgCrudRepository<RetailProductPrice>,
}

impl RetailProductPriceRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl RetailProductPriceRepositoryTrait for RetailProductPriceRepository {
    async fn find_all(&self) -> Result<Vec<RetailProductPrice>, RepositoryError> {
        info!("🔍 Fetching all retail product prices");
        self.crud.find_all().await
    }

    async fn find_by_key(
        &self,
        key: (i32, i32, DateTime<Utc>),
    ) -> Result<Option<RetailProductPrice>, RepositoryError> {
        self.crud.find_by_key(&key).await
    }

    async fn find_by_retail(
        &self,
        retail_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 ORDER BY product_id, date_from",
            RetailProductPrice::COLUMNS,
            RetailProductPrice::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(retail_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE product_id = $1 ORDER BY retail_id, date_from",
            RetailProductPrice::COLUMNS,
            RetailProductPrice::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(product_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_pair(
        &self,
        retail_id: i32,
        product_id: i32,
    ) -> Result<Vec<RetailProductPrice>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 AND product_id = $2 ORDER BY date_from",
            RetailProductPrice::COLUMNS,
            RetailProductPrice::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(retail_id)
            .bind(product_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    /// A price is in effect at `as_of` when its interval covers the instant.
    /// When intervals overlap, the one that started latest wins.
    async fn find_current(
        &self,
        retail_id: i32,
        product_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<RetailProductPrice>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE retail_id = $1 AND product_id = $2 \
               AND date_from <= $3 AND (date_to IS NULL OR date_to >= $3) \
             ORDER BY date_from DESC LIMIT 1",
            RetailProductPrice::COLUMNS,
            RetailProductPrice::TABLE
        );

        let row = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(retail_id)
            .bind(product_id)
            .bind(as_of)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(
        &self,
        req: &CreatePriceRequest,
    ) -> Result<RetailProductPrice, RepositoryError> {
        info!(
            "💰 Creating price for retail id={} product id={} from {}",
            req.retail_id, req.product_id, req.date_from
        );

        let sql = format!(
            "INSERT INTO {} (retail_id, product_id, date_from, price, date_to) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            RetailProductPrice::TABLE,
            RetailProductPrice::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let price = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(req.retail_id)
            .bind(req.product_id)
            .bind(req.date_from)
            .bind(req.price)
            .bind(req.date_to)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert price: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(price)
    }

    async fn update(
        &self,
        key: (i32, i32, DateTime<Utc>),
        req: &UpdatePriceRequest,
    ) -> Result<RetailProductPrice, RepositoryError> {
        info!(
            "✏️ Updating price for retail id={} product id={} from {}",
            key.0, key.1, key.2
        );

        let sql = format!(
            "UPDATE {} SET price = $4, date_to = $5 \
             WHERE retail_id = $1 AND product_id = $2 AND date_from = $3 RETURNING {}",
            RetailProductPrice::TABLE,
            RetailProductPrice::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let price = sqlx::query_as::<_, RetailProductPrice>(&sql)
            .bind(key.0)
            .bind(key.1)
            .bind(key.2)
            .bind(req.price)
            .bind(req.date_to)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(price)
    }

    async fn delete(&self, key: (i32, i32, DateTime<Utc>)) -> Result<u64, RepositoryError> {
        info!(
            "🗑️ Deleting price for retail id={} product id={} from {}",
            key.0, key.1, key.2
        );
        self.crud.delete_by_key(&key).await
    }
}
