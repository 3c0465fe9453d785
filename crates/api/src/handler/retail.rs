use crate::{
    abstract_trait::DynRetailService,
    domain::{
        requests::{CreateRetailRequest, UpdateRetailRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::Retail,
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
    path = "/retail",
    tag = "Retail",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of retails", body = ApiResponse<Vec<Retail>>),
        (status = 404, description = "No retails found")
    )
)]
pub async fn get_retails(
    Extension(service): Extension<DynRetailService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_retails().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/retail/{retailId}",
    tag = "Retail",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Retail details", body = ApiResponse<Retail>),
        (status = 404, description = "Retail not found")
    )
)]
pub async fn get_retail(
    Extension(service): Extension<DynRetailService>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_retail(retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/retail",
    tag = "Retail",
    security(("bearer_auth" = [])),
    request_body = CreateRetailRequest,
    responses(
        (status = 201, description = "Retail created", body = ApiResponse<Retail>),
        (status = 403, description = "Administrator role required"),
        (status = 409, description = "Retail name already exists")
    )
)]
pub async fn create_retail(
    Extension(service): Extension<DynRetailService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateRetailRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_retail(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/retail/{retailId}",
    tag = "Retail",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    request_body = UpdateRetailRequest,
    responses(
        (status = 200, description = "Retail updated", body = ApiResponse<Retail>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail not found")
    )
)]
pub async fn update_retail(
    Extension(service): Extension<DynRetailService>,
    Extension(auth): Extension<AuthUser>,
    Path(retail_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateRetailRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_retail(retail_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/retail/{retailId}",
    tag = "Retail",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Retail deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail not found")
    )
)]
pub async fn delete_retail(
    Extension(service): Extension<DynRetailService>,
    Extension(auth): Extension<AuthUser>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_retail(retail_id).await?;
    Ok(Json(response))
}

pub fn retail_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/retail", get(get_retails))
        .route("/retail", post(create_retail))
        .route("/retail/{retailId}", get(get_retail))
        .route("/retail/{retailId}", put(update_retail))
        .route("/retail/{retailId}", delete(delete_retail))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.retail_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
