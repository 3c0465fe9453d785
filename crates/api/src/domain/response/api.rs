use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope every endpoint answers with, success or failure alike.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            err_details: None,
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            err_details: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_fields() {
        let body = ApiResponse::<Vec<i32>>::message("Deleted");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Deleted"}"#);
    }

    #[test]
    fn carries_data_under_camel_case_keys() {
        let body = ApiResponse::ok("Found", vec![1, 2]);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Found","data":[1,2]}"#);
    }
}
