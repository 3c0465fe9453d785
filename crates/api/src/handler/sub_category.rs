use crate::{
    abstract_trait::DynSubCategoryService,
    domain::{
        requests::{CreateSubCategoryRequest, UpdateSubCategoryRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::SubCategory,
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
    path = "/subCategory",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of sub categories", body = ApiResponse<Vec<SubCategory>>),
        (status = 404, description = "No sub categories found")
    )
)]
pub async fn get_sub_categories(
    Extension(service): Extension<DynSubCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_sub_categories().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/subCategory/category/{categoryId}",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    params(("categoryId" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Sub categories of the category", body = ApiResponse<Vec<SubCategory>>),
        (status = 404, description = "Category not found or no sub categories")
    )
)]
pub async fn get_sub_categories_of_category(
    Extension(service): Extension<DynSubCategoryService>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_sub_categories_of_category(category_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/subCategory/{subCategoryId}",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    params(("subCategoryId" = i32, Path, description = "Sub category ID")),
    responses(
        (status = 200, description = "Sub category details", body = ApiResponse<SubCategory>),
        (status = 404, description = "Sub category not found")
    )
)]
pub async fn get_sub_category(
    Extension(service): Extension<DynSubCategoryService>,
    Path(sub_category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_sub_category(sub_category_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/subCategory",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    request_body = CreateSubCategoryRequest,
    responses(
        (status = 201, description = "Sub category created", body = ApiResponse<SubCategory>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Sub category name already exists in the category")
    )
)]
pub async fn create_sub_category(
    Extension(service): Extension<DynSubCategoryService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSubCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_sub_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/subCategory/{subCategoryId}",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    params(("subCategoryId" = i32, Path, description = "Sub category ID")),
    request_body = UpdateSubCategoryRequest,
    responses(
        (status = 200, description = "Sub category updated", body = ApiResponse<SubCategory>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Sub category not found")
    )
)]
pub async fn update_sub_category(
    Extension(service): Extension<DynSubCategoryService>,
    Extension(auth): Extension<AuthUser>,
    Path(sub_category_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSubCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_sub_category(sub_category_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/subCategory/{subCategoryId}",
    tag = "SubCategory",
    security(("bearer_auth" = [])),
    params(("subCategoryId" = i32, Path, description = "Sub category ID")),
    responses(
        (status = 200, description = "Sub category deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Sub category not found")
    )
)]
pub async fn delete_sub_category(
    Extension(service): Extension<DynSubCategoryService>,
    Extension(auth): Extension<AuthUser>,
    Path(sub_category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_sub_category(sub_category_id).await?;
    Ok(Json(response))
}

pub fn sub_category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/subCategory", get(get_sub_categories))
        .route("/subCategory", post(create_sub_category))
        .route(
            "/subCategory/category/{categoryId}",
            get(get_sub_categories_of_category),
        )
        .route("/subCategory/{subCategoryId}", get(get_sub_category))
        .route("/subCategory/{subCategoryId}", put(update_sub_category))
        .route("/subCategory/{subCategoryId}", delete(delete_sub_category))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.sub_category_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
