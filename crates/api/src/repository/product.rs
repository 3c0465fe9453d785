use crate::{
    abstract_trait::ProductRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::Product,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    crud: PgCrudRepository<Product>,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");
        self.crud.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.crud.find_by_key(&id).await
    }

    async fn find_by_sub_category(
        &self,
        sub_category_id: i32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE sub_category_id = $1 ORDER BY product_id",
            Product::COLUMNS,
            Product::TABLE
        );

        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(sub_category_id)
            .fetch_all(self.crud.pool())
            .await?;

        Ok(rows)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE product_sku = $1",
            Product::COLUMNS,
            Product::TABLE
        );

        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(sku)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        info!("📦 Creating product sku={}", req.product_sku);

        let sql = format!(
            "INSERT INTO {} (sub_category_id, product_sku, product_name, product_code_bar, \
             product_image) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            Product::TABLE,
            Product::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(req.sub_category_id)
            .bind(&req.product_sku)
            .bind(&req.product_name)
            .bind(&req.product_code_bar)
            .bind(&req.product_image)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert product: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        info!("✏️ Updating product id={id}");

        let sql = format!(
            "UPDATE {} SET sub_category_id = $2, product_sku = $3, product_name = $4, \
             product_code_bar = $5, product_image = $6 WHERE product_id = $1 RETURNING {}",
            Product::TABLE,
            Product::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(req.sub_category_id)
            .bind(&req.product_sku)
            .bind(&req.product_name)
            .bind(&req.product_code_bar)
            .bind(&req.product_image)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting product id={id}");
        self.crud.delete_by_key(&id).await
    }
}
