use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use shared::repository::PgEntity;
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i32,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub user_password: String,
    pub user_role: String,
}

impl PgEntity for User {
    type Key = i32;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "user_id, user_name, user_password, user_role";
    const KEY_COLUMNS: &'static [&'static str] = &["user_id"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Administrator,
    EndUser,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::EndUser => "endUser",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ServiceError> {
        match value {
            "administrator" => Ok(UserRole::Administrator),
            "endUser" => Ok(UserRole::EndUser),
            other => Err(ServiceError::validation(format!(
                "Unknown user role: {other}"
            ))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_its_wire_form() {
        for role in [UserRole::Administrator, UserRole::EndUser] {
            assert_eq!(UserRole::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(UserRole::parse("superuser").is_err());
    }

    #[test]
    fn password_never_serializes() {
        let user = User {
            user_id: 1,
            user_name: "ada".into(),
            user_password: "$2b$hash".into(),
            user_role: "endUser".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$hash"));
    }
}
