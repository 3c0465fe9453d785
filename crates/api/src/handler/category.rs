use crate::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::Category,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/category",
    tag = "Category",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<Category>>),
        (status = 404, description = "No categories found")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_categories().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/category/{categoryId}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_category(category_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/category",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 403, description = "Administrator role required"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/category/{categoryId}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("categoryId" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    Extension(auth): Extension<AuthUser>,
    Path(category_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_category(category_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/category/{categoryId}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    Extension(auth): Extension<AuthUser>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_category(category_id).await?;
    Ok(Json(response))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/category", get(get_categories))
        .route("/category", post(create_category))
        .route("/category/{categoryId}", get(get_category))
        .route("/category/{categoryId}", put(update_category))
        .route("/category/{categoryId}", delete(delete_category))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
