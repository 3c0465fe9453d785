use crate::{
    abstract_trait::DynUserService,
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::User,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<User>>),
        (status = 404, description = "No users were found")
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserService>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.get_users().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/{userId}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("userId" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<User>),
        (status = 404, description = "User was not found")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserService>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/user",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Invalid body or unknown role"),
        (status = 409, description = "User name already in use")
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/user/{userId}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("userId" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<User>),
        (status = 404, description = "User was not found")
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserService>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_user(user_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/user/{userId}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("userId" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User was not found")
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserService>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_user(user_id).await?;
    Ok(Json(response))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/user", get(get_users))
        .route("/user", post(create_user))
        .route("/user/{userId}", get(get_user))
        .route("/user/{userId}", patch(update_user))
        .route("/user/{userId}", delete(delete_user))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
