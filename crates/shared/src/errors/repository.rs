use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        // Unique and foreign-key violations get their own kinds so a lost
        // check-then-insert race still surfaces as 409, not 500.
        if let SqlxError::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some("23505") => return RepositoryError::AlreadyExists(db_err.message().into()),
                Some("23503") => return RepositoryError::ForeignKey(db_err.message().into()),
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
