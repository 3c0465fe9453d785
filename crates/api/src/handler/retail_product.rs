use crate::{
    abstract_trait::DynRetailProductService,
    domain::{requests::CreateRetailProductRequest, response::ApiResponse},
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::RetailProduct,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/retailProduct",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of retail product associations", body = ApiResponse<Vec<RetailProduct>>),
        (status = 404, description = "No retail products found")
    )
)]
pub async fn get_retail_products(
    Extension(service): Extension<DynRetailProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_retail_products().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProduct/retail/{retailId}",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Products sold by the retail", body = ApiResponse<Vec<RetailProduct>>),
        (status = 404, description = "Retail not found or no associations")
    )
)]
pub async fn get_retail_products_of_retail(
    Extension(service): Extension<DynRetailProductService>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_products_of_retail(retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProduct/product/{productId}",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Retails selling the product", body = ApiResponse<Vec<RetailProduct>>),
        (status = 404, description = "Product not found or no associations")
    )
)]
pub async fn get_retail_products_of_product(
    Extension(service): Extension<DynRetailProductService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_retails_of_product(product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProduct/{retailId}/{productId}",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Association details", body = ApiResponse<RetailProduct>),
        (status = 404, description = "Retail product not found")
    )
)]
pub async fn get_retail_product(
    Extension(service): Extension<DynRetailProductService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_retail_product(retail_id, product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/retailProduct",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    request_body = CreateRetailProductRequest,
    responses(
        (status = 201, description = "Association created", body = ApiResponse<RetailProduct>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail or product not found"),
        (status = 409, description = "Association already exists")
    )
)]
pub async fn create_retail_product(
    Extension(service): Extension<DynRetailProductService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateRetailProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_retail_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/retailProduct/{retailId}/{productId}",
    tag = "RetailProduct",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Association deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail product not found")
    )
)]
pub async fn delete_retail_product(
    Extension(service): Extension<DynRetailProductService>,
    Extension(auth): Extension<AuthUser>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_retail_product(retail_id, product_id).await?;
    Ok(Json(response))
}

pub fn retail_product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/retailProduct", get(get_retail_products))
        .route("/retailProduct", post(create_retail_product))
        .route(
            "/retailProduct/retail/{retailId}",
            get(get_retail_products_of_retail),
        )
        .route(
            "/retailProduct/product/{productId}",
            get(get_retail_products_of_product),
        )
        .route(
            "/retailProduct/{retailId}/{productId}",
            get(get_retail_product),
        )
        .route(
            "/retailProduct/{retailId}/{productId}",
            delete(delete_retail_product),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state.di_container.retail_product_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
