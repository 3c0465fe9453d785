use crate::{
    abstract_trait::DynBranchService,
    domain::{
        requests::{CreateBranchRequest, UpdateBranchRequest},
        response::ApiResponse,
    },
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    model::Branch,
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
    path = "/branch",
    tag = "Branch",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of branches", body = ApiResponse<Vec<Branch>>),
        (status = 404, description = "No branches found")
    )
)]
pub async fn get_branches(
    Extension(service): Extension<DynBranchService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_branches().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/branch/retail/{retailId}",
    tag = "Branch",
    security(("bearer_auth" = [])),
    params(("retailId" = i32, Path, description = "Retail ID")),
    responses(
        (status = 200, description = "Branches of the retail", body = ApiResponse<Vec<Branch>>),
        (status = 404, description = "Retail not found or no branches")
    )
)]
pub async fn get_branches_of_retail(
    Extension(service): Extension<DynBranchService>,
    Path(retail_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_branches_of_retail(retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/branch/{branchId}/{retailId}",
    tag = "Branch",
    security(("bearer_auth" = [])),
    params(
        ("branchId" = i32, Path, description = "Branch ID"),
        ("retailId" = i32, Path, description = "Retail ID")
    ),
    responses(
        (status = 200, description = "Branch details", body = ApiResponse<Branch>),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn get_branch(
    Extension(service): Extension<DynBranchService>,
    Path((branch_id, retail_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_branch(branch_id, retail_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/branch",
    tag = "Branch",
    security(("bearer_auth" = [])),
    request_body = CreateBranchRequest,
    responses(
        (status = 201, description = "Branch created", body = ApiResponse<Branch>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Retail not found"),
        (status = 409, description = "Branch name already exists for the retail")
    )
)]
pub async fn create_branch(
    Extension(service): Extension<DynBranchService>,
    Extension(auth): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateBranchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.create_branch(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/branch/{branchId}/{retailId}",
    tag = "Branch",
    security(("bearer_auth" = [])),
    params(
        ("branchId" = i32, Path, description = "Branch ID"),
        ("retailId" = i32, Path, description = "Retail ID")
    ),
    request_body = UpdateBranchRequest,
    responses(
        (status = 200, description = "Branch updated", body = ApiResponse<Branch>),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn update_branch(
    Extension(service): Extension<DynBranchService>,
    Extension(auth): Extension<AuthUser>,
    Path((branch_id, retail_id)): Path<(i32, i32)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateBranchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.update_branch(branch_id, retail_id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/branch/{branchId}/{retailId}",
    tag = "Branch",
    security(("bearer_auth" = [])),
    params(
        ("branchId" = i32, Path, description = "Branch ID"),
        ("retailId" = i32, Path, description = "Retail ID")
    ),
    responses(
        (status = 200, description = "Branch deleted"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn delete_branch(
    Extension(service): Extension<DynBranchService>,
    Extension(auth): Extension<AuthUser>,
    Path((branch_id, retail_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    auth.require_admin()?;
    let response = service.delete_branch(branch_id, retail_id).await?;
    Ok(Json(response))
}

pub fn branch_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/branch", get(get_branches))
        .route("/branch", post(create_branch))
        .route("/branch/retail/{retailId}", get(get_branches_of_retail))
        .route("/branch/{branchId}/{retailId}", get(get_branch))
        .route("/branch/{branchId}/{retailId}", put(update_branch))
        .route("/branch/{branchId}/{retailId}", delete(delete_branch))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.branch_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
