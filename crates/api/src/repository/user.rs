use crate::{abstract_trait::UserRepositoryTrait, model::User};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    repository::{PgCrudRepository, PgEntity},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserRepository {
    crud: PgCrudRepository<User>,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            crud: PgCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        info!("🔍 Fetching all users");
        self.crud.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        self.crud.find_by_key(&id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_name = $1",
            User::COLUMNS,
            User::TABLE
        );

        let row = sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .fetch_optional(self.crud.pool())
            .await?;

        Ok(row)
    }

    async fn create(
        &self,
        name: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError> {
        info!("👤 Creating user name={name}");

        let sql = format!(
            "INSERT INTO {} (user_name, user_password, user_role) \
             VALUES ($1, $2, $3) RETURNING {}",
            User::TABLE,
            User::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .bind(password_hash)
            .bind(role)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert user: {e:?}");
                RepositoryError::from(e)
            })?;
        tx.commit().await?;

        Ok(user)
    }

    async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        password_hash: Option<&str>,
        role: Option<&str>,
    ) -> Result<User, RepositoryError> {
        info!("✏️ Updating user id={id}");

        let sql = format!(
            "UPDATE {} SET user_name = COALESCE($2, user_name), \
             user_password = COALESCE($3, user_password), \
             user_role = COALESCE($4, user_role) \
             WHERE user_id = $1 RETURNING {}",
            User::TABLE,
            User::COLUMNS
        );

        let mut tx = self.crud.pool().begin().await?;
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(name)
            .bind(password_hash)
            .bind(role)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        tx.commit().await?;

        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        info!("🗑️ Deleting user id={id}");
        self.crud.delete_by_key(&id).await
    }
}
