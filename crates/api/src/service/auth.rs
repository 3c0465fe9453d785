use crate::{
    abstract_trait::{AuthServiceTrait, DynUserRepository},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        response::ApiResponse,
    },
    model::{User, UserRole},
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::ServiceError,
};
use tracing::info;

pub struct AuthService {
    user_repository: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        user_repository: DynUserRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            user_repository,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    /// Self-service signup; the account always starts as an end user.
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<User>, ServiceError> {
        info!("📝 Registering user name={}", req.user_name);

        if let Some(existing) = self.user_repository.find_by_name(&req.user_name).await? {
            return Err(ServiceError::conflict(
                "userName is already in use",
                serde_json::to_string(&existing).ok(),
            ));
        }

        let password_hash = self.hashing.hash_password(&req.user_password).await?;

        let user = self
            .user_repository
            .create(&req.user_name, &password_hash, UserRole::EndUser.as_str())
            .await?;

        info!("✅ User registered id={}", user.user_id);
        Ok(ApiResponse::ok("User created successfully", user))
    }

    async fn login_user(&self, req: &LoginRequest) -> Result<ApiResponse<String>, ServiceError> {
        info!("🔐 Login attempt name={}", req.user_name);

        let user = self
            .user_repository
            .find_by_name(&req.user_name)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.user_password, &req.user_password)
            .await?;

        let token = self
            .jwt
            .generate_token(user.user_id as i64, &user.user_role)?;

        info!("✅ Login successful for user id={}", user.user_id);
        Ok(ApiResponse::ok("Authentication was successful", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::UserRepositoryTrait;
    use shared::{
        abstract_trait::{HashingTrait, JwtServiceTrait},
        config::Claims,
        errors::RepositoryError,
    };
    use std::sync::{Arc, Mutex};

    struct PlainHashing;

    #[async_trait]
    impl HashingTrait for PlainHashing {
        async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
            Ok(format!("hashed:{password}"))
        }

        async fn compare_password(
            &self,
            hashed_password: &str,
            password: &str,
        ) -> Result<(), ServiceError> {
            if hashed_password == format!("hashed:{password}") {
                Ok(())
            } else {
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    struct StaticJwt;

    impl JwtServiceTrait for StaticJwt {
        fn generate_token(&self, user_id: i64, role: &str) -> Result<String, ServiceError> {
            Ok(format!("token-{user_id}-{role}"))
        }

        fn verify_token(&self, _token: &str) -> Result<Claims, ServiceError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct InMemoryUserRepository {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == id)
                .cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_name == name)
                .cloned())
        }

        async fn create(
            &self,
            name: &str,
            password_hash: &str,
            role: &str,
        ) -> Result<User, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|u| u.user_id).max().unwrap_or(0) + 1;
            let user = User {
                user_id: id,
                user_name: name.into(),
                user_password: password_hash.into(),
                user_role: role.into(),
            };
            rows.push(user.clone());
            Ok(user)
        }

        async fn update(
            &self,
            _id: i32,
            _name: Option<&str>,
            _password_hash: Option<&str>,
            _role: Option<&str>,
        ) -> Result<User, RepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i32) -> Result<u64, RepositoryError> {
            unimplemented!()
        }
    }

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(PlainHashing),
            Arc::new(StaticJwt),
        )
    }

    #[tokio::test]
    async fn signup_always_creates_an_end_user() {
        let svc = service();
        let res = svc
            .register_user(&RegisterRequest {
                user_name: "ada".into(),
                user_password: "secret1".into(),
            })
            .await
            .unwrap();
        assert_eq!(res.data.unwrap().user_role, "endUser");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let svc = service();
        svc.register_user(&RegisterRequest {
            user_name: "ada".into(),
            user_password: "secret1".into(),
        })
        .await
        .unwrap();

        let err = svc
            .login_user(&LoginRequest {
                user_name: "ada".into(),
                user_password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_with_unknown_user_is_indistinguishable_from_bad_password() {
        let svc = service();
        let err = svc
            .login_user(&LoginRequest {
                user_name: "ghost".into(),
                user_password: "whatever".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_returns_a_token_carrying_identity_and_role() {
        let svc = service();
        svc.register_user(&RegisterRequest {
            user_name: "ada".into(),
            user_password: "secret1".into(),
        })
        .await
        .unwrap();

        let res = svc
            .login_user(&LoginRequest {
                user_name: "ada".into(),
                user_password: "secret1".into(),
            })
            .await
            .unwrap();
        assert_eq!(res.data.unwrap(), "token-1-endUser");
    }
}
