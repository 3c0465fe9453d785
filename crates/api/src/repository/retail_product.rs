use crate::{
    abstract_trait::RetailProductRepositoryTrait,
    domain::requests::CreateRetailProductRequest, model::RetailProduct,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct RetailProductRepository {
    crud: PgCrudRepository<RetailProduct>,
}

impl RetailProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl RetailProductRepositoryTrait for RetailProductRepository {
    async fn find_all(&self) -> Result<Vec<RetailProduct>, RepositoryError> {
        info!("🔍 Fetching all retail products");
        self.crud.find_all().await
    }

    async fn find_by_key(
        &self,
        key: (i32, i32),
    ) -> Result<Option<RetailProduct>, RepositoryError> {
        self.crud.find_by_key(&key).await
    }

    async fn find_by_retail(
        &self,
        retail_id: i32,
    ) -> Result<Vec<RetailProduct>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE retail_id = $1 ORDER BY product_id",
            RetailProduct::COLUMNS,
            RetailProduct::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProduct>(&sql)
            .bind(retail_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<RetailProduct>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE product_id = $1 ORDER BY retail_id",
            RetailProduct::COLUMNS,
            RetailProduct::TABLE
        );

        let rows = sqlx::query_as::<_, RetailProduct>(&sql)
            .bind(product_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn create(
        &self,
        req: &CreateRetailProductRequest,
    ) -> Result<RetailProduct, RepositoryError> {
        info!(
            "🔗 Linking product id={} to retail id={}",
            req.product_id, req.retail_id
        );

        let sql = format!(
            "INSERT INTO {} (retail_id, product_id) VALUES ($1, $2) RETURNING {}",
            RetailProduct::TABLE,
            RetailProduct::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let retail_product = sqlx::query_as::<_, RetailProduct>(&sql)
            .bind(req.retail_id)
            .bind(req.product_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert retail product: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(retail_product)
    }

    async fn delete(&self, key: (i32, i32)) -> Result<u64, RepositoryError> {
        info!(
            "🗑️ Unlinking product id={} from retail id={}",
            key.1, key.0
        );
        self.crud.delete_by_key(&key).await
    }
}
