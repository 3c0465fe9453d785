use crate::{
    abstract_trait::DynRetailProductPriceService,
    domain::{
        requests::{CreatePriceRequest, CurrentPriceQuery, UpdatePriceRequest},
        response::ApiResponse,
    },
    handler::parse_date_param,
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::RetailProductPrice,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/retailProductPrice",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of prices", body = ApiResponse<Vec<RetailProductPrice>>),
        (status = 404, description = "No retail product prices found")
    )
)]
pub async fn get_prices(
    Extension(service): Extension<DynRetailProductPriceService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_prices().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductPrice/retail/{retailId}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Prices of the retail", body = ApiResponse<Vec<RetailProductPrice>>),
        (status = 404, description = "Retail not found or no prices")
    )
)]
pub async fn get_prices_of_retail(
    Extension(service): Extension<DynRetailProductPriceService>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_prices_of_retail(retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductPrice/product/{productId}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Prices of the product", body = ApiResponse<Vec<RetailProductPrice>>),
        (status = 404, description = "Product not found or no prices")
    )
)]
pub async fn get_prices_of_product(
    Extension(service): Extension<DynRetailProductPriceService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_prices_of_product(product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductPrice/retail/{retailId}/product/{productId}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Price history of the pair", body = ApiResponse<Vec<RetailProductPrice>>),
        (status = 404, description = "Pair not found or no prices")
    )
)]
pub async fn get_prices_of_pair(
    Extension(service): Extension<DynRetailProductPriceService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_prices_of_pair(retail_id, product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductPrice/retail/{retailId}/product/{productId}/current",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("date" = Option<String>, Query, description = "RFC 3339 instant, defaults to now")
    ),
    responses(
        (status = 200, description = "Price valid at the instant", body = ApiResponse<RetailProductPrice>),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No current price found for this retail product")
    )
)]
pub async fn get_current_price(
    Extension(service): Extension<DynRetailProductPriceService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
    Query(query): Query<CurrentPriceQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let as_of = match query.date.as_deref() {
        Some(raw) => parse_date_param("date", raw)?,
        None => Utc::now(),
    };
    let response = service
        .get_current_price(retail_id, product_id, as_of)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    responses(
        (status = 200, description = "Price details", body = ApiResponse<RetailProductPrice>),
        (status = 400, description = "Malformed dateFrom"),
        (status = 404, description = "Retail product price not found")
    )
)]
pub async fn get_price(
    Extension(service): Extension<DynRetailProductPriceService>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
) -> Result<impl IntoResponse, HttpError> {
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service.get_price((retail_id, product_id, date_from)).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/retailProductPrice",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    request_body = CreatePriceRequest,
    responses(
        (status = 201, description = "Price created", body = ApiResponse<RetailProductPrice>),
        (status = 400, description = "Invalid interval or negative price"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail, product or association not found"),
        (status = 409, description = "Price for this date already exists")
    )
)]
pub async fn create_price(
    Extension(service): Extension<DynRetailProductPriceService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreatePriceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_price(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Price updated", body = ApiResponse<RetailProductPrice>),
        (status = 400, description = "Invalid interval or negative price"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail product price not found")
    )
)]
pub async fn update_price(
    Extension(service): Extension<DynRetailProductPriceService>,
    Extension(auth): Extension<AuthUser>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdatePriceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service
        .update_price((retail_id, product_id, date_from), &body)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductPrice",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    responses(
        (status = 200, description = "Price deleted"),
        (status = 400, description = "Malformed dateFrom"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail product price not found")
    )
)]
pub async fn delete_price(
    Extension(service): Extension<DynRetailProductPriceService>,
    Extension(auth): Extension<AuthUser>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service
        .delete_price((retail_id, product_id, date_from))
        .await?;
    Ok(Json(response))
}

pub fn retail_product_price_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/retailProductPrice", get(get_prices))
        .route("/retailProductPrice", post(create_price))
        .route("/retailProductPrice/retail/{retailId}", get(get_prices_of_retail))
        .route(
            "/retailProductPrice/product/{productId}",
            get(get_prices_of_product),
        )
        .route(
            "/retailProductPrice/retail/{retailId}/product/{productId}",
            get(get_prices_of_pair),
        )
        .route(
            "/retailProductPrice/retail/{retailId}/product/{productId}/current",
            get(get_current_price),
        )
        .route(
            "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
            get(get_price),
        )
        .route(
            "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
            put(update_price),
        )
        .route(
            "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
            delete(delete_price),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state.di_container.retail_product_price_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
