mod auth;
mod branch;
mod category;
mod product;
mod retail;
mod retail_product;
mod retail_product_availability;
mod retail_product_price;
mod sub_category;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use chrono::{DateTime, Utc};
use shared::{
    errors::HttpError,
    utils::{parse_datetime, shutdown_signal},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::branch::branch_routes;
pub use self::category::category_routes;
pub use self::product::product_routes;
pub use self::retail::retail_routes;
pub use self::retail_product::retail_product_routes;
pub use self::retail_product_availability::retail_product_availability_routes;
pub use self::retail_product_price::retail_product_price_routes;
pub use self::sub_category::sub_category_routes;
pub use self::user::user_routes;

/// Parses an RFC 3339 date parameter, rejecting malformed input with a 400.
pub(crate) fn parse_date_param(name: &str, raw: &str) -> Result<DateTime<Utc>, HttpError> {
    parse_datetime(raw)
        .ok_or_else(|| HttpError::BadRequest(format!("{name} must be a valid RFC 3339 date-time")))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,

        retail::get_retails,
        retail::get_retail,
        retail::create_retail,
        retail::update_retail,
        retail::delete_retail,

        branch::get_branches,
        branch::get_branches_of_retail,
        branch::get_branch,
        branch::create_branch,
        branch::update_branch,
        branch::delete_branch,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        sub_category::get_sub_categories,
        sub_category::get_sub_categories_of_category,
        sub_category::get_sub_category,
        sub_category::create_sub_category,
        sub_category::update_sub_category,
        sub_category::delete_sub_category,

        product::get_products,
        product::get_products_of_sub_category,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        retail_product::get_retail_products,
        retail_product::get_retail_products_of_retail,
        retail_product::get_retail_products_of_product,
        retail_product::get_retail_product,
        retail_product::create_retail_product,
        retail_product::delete_retail_product,

        retail_product_price::get_prices,
        retail_product_price::get_prices_of_retail,
        retail_product_price::get_prices_of_product,
        retail_product_price::get_prices_of_pair,
        retail_product_price::get_current_price,
        retail_product_price::get_price,
        retail_product_price::create_price,
        retail_product_price::update_price,
        retail_product_price::delete_price,

        retail_product_availability::get_availabilities,
        retail_product_availability::get_availabilities_of_retail,
        retail_product_availability::get_availabilities_of_product,
        retail_product_availability::get_availabilities_of_pair,
        retail_product_availability::get_current_availability,
        retail_product_availability::get_availabilities_in_range,
        retail_product_availability::get_availability,
        retail_product_availability::create_availability,
        retail_product_availability::update_availability,
        retail_product_availability::delete_availability,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "User", description = "User management endpoints"),
        (name = "Retail", description = "Retail chain endpoints"),
        (name = "Branch", description = "Retail branch endpoints"),
        (name = "Category", description = "Product category endpoints"),
        (name = "SubCategory", description = "Product sub category endpoints"),
        (name = "Product", description = "Product catalog endpoints"),
        (name = "RetailProduct", description = "Retail to product association endpoints"),
        (name = "RetailProductPrice", description = "Time bounded price endpoints"),
        (name = "RetailProductAvailability", description = "Time bounded availability endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(retail_routes(shared_state.clone()))
            .merge(branch_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(sub_category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(retail_product_routes(shared_state.clone()))
            .merge(retail_product_price_routes(shared_state.clone()))
            .merge(retail_product_availability_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_every_delete_operation() {
        let api = ApiDoc::openapi();

        for path in [
            "/retail/{retailId}",
            "/user/{userId}",
            "/branch/{branchId}/{retailId}",
            "/category/{categoryId}",
            "/subCategory/{subCategoryId}",
            "/product/{productId}",
            "/retailProduct/{retailId}/{productId}",
            "/retailProductPrice/{retailId}/{productId}/{dateFrom}",
            "/retailProductAvailability/{retailId}/{productId}/{dateFrom}",
        ] {
            let item = api
                .paths
                .paths
                .get(path)
                .unwrap_or_else(|| panic!("missing path {path}"));
            assert!(item.delete.is_some(), "no delete operation for {path}");
        }
    }

    #[test]
    fn date_params_must_be_rfc3339() {
        assert!(parse_date_param("date", "2024-05-01T00:00:00Z").is_ok());

        let err = parse_date_param("dateFrom", "yesterday").unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(msg) if msg.contains("dateFrom")));
    }
}
