mod generic;

pub use self::generic::{PgCrudRepository, PgEntity, PgKey};
