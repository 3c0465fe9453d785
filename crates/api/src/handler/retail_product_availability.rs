use crate::{
    abstract_trait::DynRetailProductAvailabilityService,
    domain::{
        requests::{
            AvailabilityRangeQuery, CreateAvailabilityRequest, CurrentAvailabilityQuery,
            UpdateAvailabilityRequest,
        },
        response::ApiResponse,
    },
    handler::parse_date_param,
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::RetailProductAvailability,
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
    path = "/retailProductAvailability",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of availabilities", body = ApiResponse<Vec<RetailProductAvailability>>),
        (status = 404, description = "No retail product availabilities found")
    )
)]
pub async fn get_availabilities(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_availabilities().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/retail/{retailId}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Availabilities of the retail", body = ApiResponse<Vec<RetailProductAvailability>>),
        (status = 404, description = "Retail not found or no availabilities")
    )
)]
pub async fn get_availabilities_of_retail(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_availabilities_of_retail(retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/product/{productId}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(("productId" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Availabilities of the product", body = ApiResponse<Vec<RetailProductAvailability>>),
        (status = 404, description = "Product not found or no availabilities")
    )
)]
pub async fn get_availabilities_of_product(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_availabilities_of_product(product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/retail/{retailId}/product/{productId}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability history of the pair", body = ApiResponse<Vec<RetailProductAvailability>>),
        (status = 404, description = "Pair not found or no availabilities")
    )
)]
pub async fn get_availabilities_of_pair(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .get_availabilities_of_pair(retail_id, product_id)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/retail/{retailId}/product/{productId}/current",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("date" = Option<String>, Query, description = "RFC 3339 instant, defaults to now")
    ),
    responses(
        (status = 200, description = "Availability valid at the instant", body = ApiResponse<RetailProductAvailability>),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No current availability found for this retail product")
    )
)]
pub async fn get_current_availability(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
    Query(query): Query<CurrentAvailabilityQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let as_of = match query.date.as_deref() {
        Some(raw) => parse_date_param("date", raw)?,
        None => Utc::now(),
    };
    let response = service
        .get_current_availability(retail_id, product_id, as_of)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/retail/{retailId}/product/{productId}/range",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("startDate" = String, Query, description = "RFC 3339 range start"),
        ("endDate" = String, Query, description = "RFC 3339 range end")
    ),
    responses(
        (status = 200, description = "Availabilities overlapping the range", body = ApiResponse<Vec<RetailProductAvailability>>),
        (status = 400, description = "Malformed or inverted range"),
        (status = 404, description = "No availabilities in the range")
    )
)]
pub async fn get_availabilities_in_range(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path((retail_id, product_id)): Path<(i32, i32)>,
    Query(query): Query<AvailabilityRangeQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let start_date = parse_date_param("startDate", &query.start_date)?;
    let end_date = parse_date_param("endDate", &query.end_date)?;
    let response = service
        .get_availabilities_in_range(retail_id, product_id, start_date, end_date)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    responses(
        (status = 200, description = "Availability details", body = ApiResponse<RetailProductAvailability>),
        (status = 400, description = "Malformed dateFrom"),
        (status = 404, description = "Retail product availability not found")
    )
)]
pub async fn get_availability(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
) -> Result<impl IntoResponse, HttpError> {
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service
        .get_availability((retail_id, product_id, date_from))
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/retailProductAvailability",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    request_body = CreateAvailabilityRequest,
    responses(
        (status = 201, description = "Availability created", body = ApiResponse<RetailProductAvailability>),
        (status = 400, description = "Invalid interval"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail, product or association not found"),
        (status = 409, description = "Availability for this date already exists")
    )
)]
pub async fn create_availability(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAvailabilityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_availability(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Availability updated", body = ApiResponse<RetailProductAvailability>),
        (status = 400, description = "Invalid interval"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail product availability not found")
    )
)]
pub async fn update_availability(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Extension(auth): Extension<AuthUser>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateAvailabilityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service
        .update_availability((retail_id, product_id, date_from), &body)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
    tag = "RetailProductAvailability",
    security(("bearer_auth" = [])),
    params(
        ("retailId" = i32, Path, description = "Retail ID"),
        ("productId" = i32, Path, description = "Product ID"),
        ("dateFrom" = String, Path, description = "RFC 3339 validity start")
    ),
    responses(
        (status = 200, description = "Availability deleted"),
        (status = 400, description = "Malformed dateFrom"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail product availability not found")
    )
)]
pub async fn delete_availability(
    Extension(service): Extension<DynRetailProductAvailabilityService>,
    Extension(auth): Extension<AuthUser>,
    Path((retail_id, product_id, date_from)): Path<(i32, i32, String)>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let date_from = parse_date_param("dateFrom", &date_from)?;
    let response = service
        .delete_availability((retail_id, product_id, date_from))
        .await?;
    Ok(Json(response))
}

pub fn retail_product_availability_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/retailProductAvailability", get(get_availabilities))
        .route("/retailProductAvailability", post(create_availability))
        .route(
            "/retailProductAvailability/retail/{retailId}",
            get(get_availabilities_of_retail),
        )
        .route(
            "/retailProductAvailability/product/{productId}",
            get(get_availabilities_of_product),
        )
        .route(
            "/retailProductAvailability/retail/{retailId}/product/{productId}",
            get(get_availabilities_of_pair),
        )
        .route(
            "/retailProductAvailability/retail/{retailId}/product/{productId}/current",
            get(get_current_availability),
        )
        .route(
            "/retailProductAvailability/retail/{retailId}/product/{productId}/range",
            get(get_availabilities_in_range),
        )
        .route(
            "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
            get(get_availability),
        )
        .route(
            "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
            put(update_availability),
        )
        .route(
            "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
            delete(delete_availability),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state
                .di_container
                .retail_product_availability_service
                .clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
