use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        response::ApiResponse,
    },
    model::{User, UserRole},
};
use async_trait::async_trait;
use shared::{abstract_trait::DynHashing, errors::ServiceError};

pub struct UserService {
    repository: DynUserRepository,
    hashing: DynHashing,
}

impl UserService {
    pub fn new(repository: DynUserRepository, hashing: DynHashing) -> Self {
        Self {
            repository,
            hashing,
        }
    }

    async fn ensure_name_free(&self, name: &str, own_id: Option<i32>) -> Result<(), ServiceError> {
        if let Some(existing) = self.repository.find_by_name(name).await?
            && own_id != Some(existing.user_id)
        {
            return Err(ServiceError::conflict(
                "userName is already in use",
                serde_json::to_string(&existing).ok(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> Result<ApiResponse<Vec<User>>, ServiceError> {
        let users = self.repository.find_all().await?;
        if users.is_empty() {
            return Err(ServiceError::not_found("No users were found"));
        }
        Ok(ApiResponse::ok("Users retrieved successfully", users))
    }

    async fn get_user(&self, id: i32) -> Result<ApiResponse<User>, ServiceError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User was not found"))?;
        Ok(ApiResponse::ok("User retrieved successfully", user))
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<User>, ServiceError> {
        let role = UserRole::parse(&req.user_role)?;
        self.ensure_name_free(&req.user_name, None).await?;

        let password_hash = self.hashing.hash_password(&req.user_password).await?;
        let user = self
            .repository
            .create(&req.user_name, &password_hash, role.as_str())
            .await?;

        Ok(ApiResponse::ok("User created successfully", user))
    }

    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<User>, ServiceError> {
        if req.user_name.is_none() && req.user_password.is_none() && req.user_role.is_none() {
            return Err(ServiceError::validation(
                "Either userName, userPassword or userRole are required",
            ));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User was not found"))?;

        if let Some(role) = &req.user_role {
            UserRole::parse(role)?;
        }
        if let Some(name) = &req.user_name {
            self.ensure_name_free(name, Some(id)).await?;
        }

        let password_hash = match &req.user_password {
            Some(password) => Some(self.hashing.hash_password(password).await?),
            None => None,
        };

        let user = self
            .repository
            .update(
                id,
                req.user_name.as_deref(),
                password_hash.as_deref(),
                req.user_role.as_deref(),
            )
            .await?;

        Ok(ApiResponse::ok("User updated successfully", user))
    }

    async fn delete_user(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("User was not found"));
        }
        Ok(ApiResponse::message("User deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::UserRepositoryTrait;
    use shared::errors::RepositoryError;
    use std::sync::{Arc, Mutex};

    struct PlainHashing;

    #[async_trait]
    impl shared::abstract_trait::HashingTrait for PlainHashing {
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
            id: i32,
            name: Option<&str>,
            password_hash: Option<&str>,
            role: Option<&str>,
        ) -> Result<User, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let user = rows
                .iter_mut()
                .find(|u| u.user_id == id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(name) = name {
                user.user_name = name.into();
            }
            if let Some(hash) = password_hash {
                user.user_password = hash.into();
            }
            if let Some(role) = role {
                user.user_role = role.into();
            }
            Ok(user.clone())
        }

        async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|u| u.user_id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn service() -> UserService {
        UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(PlainHashing),
        )
    }

    #[tokio::test]
    async fn create_hashes_the_password_and_keeps_the_role() {
        let svc = service();
        let res = svc
            .create_user(&CreateUserRequest {
                user_name: "ada".into(),
                user_password: "secret1".into(),
                user_role: "administrator".into(),
            })
            .await
            .unwrap();

        let user = res.data.unwrap();
        assert_eq!(user.user_password, "hashed:secret1");
        assert_eq!(user.user_role, "administrator");
    }

    #[tokio::test]
    async fn create_rejects_unknown_roles() {
        let svc = service();
        let err = svc
            .create_user(&CreateUserRequest {
                user_name: "ada".into(),
                user_password: "secret1".into(),
                user_role: "superuser".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_patch_is_a_validation_error() {
        let svc = service();
        let err = svc
            .update_user(
                1,
                &UpdateUserRequest {
                    user_name: None,
                    user_password: None,
                    user_role: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn taken_user_name_is_a_conflict() {
        let svc = service();
        svc.create_user(&CreateUserRequest {
            user_name: "ada".into(),
            user_password: "secret1".into(),
            user_role: "endUser".into(),
        })
        .await
        .unwrap();

        let err = svc
            .create_user(&CreateUserRequest {
                user_name: "ada".into(),
                user_password: "secret2".into(),
                user_role: "endUser".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict { .. }));
    }
}
