use crate::{config::ConnectionPool, errors::RepositoryError};
use chrono::{DateTime, Utc};
use sqlx::{
    FromRow, Postgres,
    postgres::{PgArguments, PgRow},
    query::{Query, QueryAs},
};
use std::marker::PhantomData;

/// Binds a (possibly composite) primary key to a query, positionally,
/// in the order declared by [`PgEntity::KEY_COLUMNS`].
pub trait PgKey: Send + Sync {
    fn bind_query<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments>;

    fn bind_query_as<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments>;
}

impl PgKey for i32 {
    fn bind_query<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query.bind(*self)
    }

    fn bind_query_as<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(*self)
    }
}

impl PgKey for (i32, i32) {
    fn bind_query<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query.bind(self.0).bind(self.1)
    }

    fn bind_query_as<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(self.0).bind(self.1)
    }
}

impl PgKey for (i32, i32, DateTime<Utc>) {
    fn bind_query<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query.bind(self.0).bind(self.1).bind(self.2)
    }

    fn bind_query_as<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(self.0).bind(self.1).bind(self.2)
    }
}

/// Table metadata for an entity, enough to drive the find/delete half of the
/// CRUD quartet generically over any composite-key shape. Inserts and
/// updates stay per-entity, where uniqueness and foreign-key rules live.
pub trait PgEntity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    type Key: PgKey;

    const TABLE: &'static str;
    const COLUMNS: &'static str;
    const KEY_COLUMNS: &'static [&'static str];

    fn key_predicate() -> String {
        Self::KEY_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

/// One generic repository for the per-entity find-all / find-by-key /
/// delete-by-key triple, shared by all eight entity verticals.
pub struct PgCrudRepository<E> {
    db: ConnectionPool,
    _entity: PhantomData<E>,
}

impl<E> Clone for PgCrudRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: PgEntity> PgCrudRepository<E> {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.db
    }

    pub async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            E::COLUMNS,
            E::TABLE,
            E::KEY_COLUMNS.join(", ")
        );

        let rows = sqlx::query_as::<Postgres, E>(&sql)
            .fetch_all(&self.db)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_key(&self, key: &E::Key) -> Result<Option<E>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            E::COLUMNS,
            E::TABLE,
            E::key_predicate()
        );

        let query = key.bind_query_as(sqlx::query_as::<Postgres, E>(&sql));
        let row = query.fetch_optional(&self.db).await?;

        Ok(row)
    }

    /// Deletes by exact key inside a transaction; returns affected rows.
    pub async fn delete_by_key(&self, key: &E::Key) -> Result<u64, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE {}", E::TABLE, E::key_predicate());

        let mut tx = self.db.begin().await?;
        let result = key.bind_query(sqlx::query(&sql)).execute(&mut *tx).await?;
        tx.commit().await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sqlx::FromRow;

    #[derive(Debug, FromRow)]
    #[allow(dead_code)]
    struct Probe {
        retail_id: i32,
        product_id: i32,
        date_from: DateTime<Utc>,
        price: Decimal,
    }

    impl PgEntity for Probe {
        type Key = (i32, i32, DateTime<Utc>);

        const TABLE: &'static str = "retail_product_prices";
        const COLUMNS: &'static str = "retail_id, product_id, date_from, price";
        const KEY_COLUMNS: &'static [&'static str] = &["retail_id", "product_id", "date_from"];
    }

    #[test]
    fn key_predicate_numbers_placeholders_in_declaration_order() {
        assert_eq!(
            Probe::key_predicate(),
            "retail_id = $1 AND product_id = $2 AND date_from = $3"
        );
    }
}
