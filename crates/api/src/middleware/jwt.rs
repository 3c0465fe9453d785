use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    abstract_trait::DynJwtService,
    errors::{ErrorResponse, HttpError},
};

use crate::model::UserRole;

/// Identity attached to the request once the token checks out.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Administrator
    }

    /// Mutations are reserved for administrators.
    pub fn require_admin(&self) -> Result<(), HttpError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(HttpError::Forbidden(
                "Administrator role required".to_string(),
            ))
        }
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            message: message.to_string(),
            err_details: None,
            data: None,
        }),
    )
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let token = match token {
        Some(token) => token,
        None => return Err(unauthorized("You are not logged in, please provide token")),
    };

    let claims = match jwt.verify_token(&token) {
        Ok(claims) => claims,
        Err(_) => return Err(unauthorized("Invalid token")),
    };

    let role = match UserRole::parse(&claims.role) {
        Ok(role) => role,
        Err(_) => return Err(unauthorized("Invalid token")),
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
        role,
    });

    Ok(next.run(req).await)
}
