use serde::Serialize;
use utoipa::ToSchema;

/// Error body sharing the `{ message, errDetails, data }` envelope used by
/// every endpoint; `data` is always null for errors.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub err_details: Option<String>,
    pub data: Option<serde_json::Value>,
}
