use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict {
        message: String,
        details: Option<String>,
    },
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict {
                    message: "Record already exists".into(),
                    details: Some(msg),
                },
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::Sqlx(e) => HttpError::Internal(e.to_string()),
            },

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict { message, details } => {
                HttpError::Conflict { message, details }
            }

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::InvalidCredentials => HttpError::Unauthorized(
                "Either the user does not exist or the password is incorrect".into(),
            ),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, err_details) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Conflict { message, details } => {
                (StatusCode::CONFLICT, message, details)
            }
            HttpError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(details),
            ),
        };

        let body = Json(ErrorResponse {
            message,
            err_details,
            data: None,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_service_errors_map_to_404() {
        let err = HttpError::from(ServiceError::not_found("Retail not found"));
        assert!(matches!(err, HttpError::NotFound(msg) if msg == "Retail not found"));

        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(_)));
    }

    #[test]
    fn conflicts_keep_their_details() {
        let err = HttpError::from(ServiceError::conflict(
            "Retail product price for this date already exists",
            Some("{\"retailId\":1}".into()),
        ));

        match err {
            HttpError::Conflict { message, details } => {
                assert_eq!(message, "Retail product price for this date already exists");
                assert_eq!(details.as_deref(), Some("{\"retailId\":1}"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn storage_unique_violation_maps_to_conflict() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
            "duplicate key value violates unique constraint".into(),
        )));
        assert!(matches!(err, HttpError::Conflict { .. }));
    }

    #[test]
    fn validation_errors_map_to_400() {
        let err = HttpError::from(ServiceError::Validation(vec![
            "retailId must be a positive integer".into(),
        ]));
        assert!(matches!(err, HttpError::BadRequest(_)));
    }
}
