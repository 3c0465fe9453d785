mod jwt;
mod validate;

pub use self::jwt::{AuthUser, auth_middleware};
pub use self::validate::SimpleValidatedJson;
