use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::Product,
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
    path = "/product",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 404, description = "No products found")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_products().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/product/subCategory/{subCategoryId}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("subCategoryId" = i32, Path, description = "Sub category ID")),
    responses(
        (status = 200, description = "Products of the sub category", body = ApiResponse<Vec<Product>>),
        (status = 404, description = "Sub category not found or no products")
    )
)]
pub async fn get_products_of_sub_category(
    Extension(service): Extension<DynProductService>,
    Path(sub_category_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_products_of_sub_category(sub_category_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/product/{productId}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_product(product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Sub category not found"),
        (status = 409, description = "Product SKU already exists")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/product/{productId}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product SKU already exists")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Extension(auth): Extension<AuthUser>,
    Path(product_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_product(product_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/product/{productId}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Extension(auth): Extension<AuthUser>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_product(product_id).await?;
    Ok(Json(response))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product", get(get_products))
        .route("/product", post(create_product))
        .route(
            "/product/subCategory/{subCategoryId}",
            get(get_products_of_sub_category),
        )
        .route("/product/{productId}", get(get_product))
        .route("/product/{productId}", put(update_product))
        .route("/product/{productId}", delete(delete_product))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
