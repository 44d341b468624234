//! Typed error raised by the Databricks request executor.

use serde_json::Value;
use thiserror::Error;

/// Error for a failed Databricks API exchange. Carries the HTTP status and
/// the raw response body (parsed JSON when possible) so callers can
/// classify failures without re-parsing anything.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub response: Option<Value>,
}

impl ApiError {
    /// Connection / timeout / protocol failure with no HTTP status.
    pub fn transport(err: reqwest::Error) -> Self {
        Self {
            message: format!("API request failed: {err}"),
            status_code: err.status().map(|s| s.as_u16()),
            response: None,
        }
    }

    /// Non-2xx response. The error body is parsed best-effort; any `error`,
    /// `error_code`, or `message` fields it carries are folded into the
    /// message for downstream classification.
    pub fn http_status(status: reqwest::StatusCode, body: String) -> Self {
        let mut message = format!("API request failed: {status}");
        let response = match serde_json::from_str::<Value>(&body) {
            Ok(json) => {
                if let Some(detail) = error_detail(&json) {
                    message.push_str(" - ");
                    message.push_str(&detail);
                }
                Some(json)
            }
            Err(_) => {
                if body.is_empty() {
                    None
                } else {
                    Some(Value::String(body))
                }
            }
        };
        Self {
            message,
            status_code: Some(status.as_u16()),
            response,
        }
    }

    /// 2xx response whose body was not valid JSON.
    pub fn decode(err: serde_json::Error) -> Self {
        Self {
            message: format!("Failed to decode API response: {err}"),
            status_code: None,
            response: None,
        }
    }

    /// Whether this failure means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404) || self.message.contains("RESOURCE_DOES_NOT_EXIST")
    }
}

/// Pull a human-readable detail out of a Databricks error body.
fn error_detail(json: &Value) -> Option<String> {
    let error_code = json.get("error_code").and_then(Value::as_str);
    let text = json
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| json.get("message").and_then(Value::as_str));
    match (error_code, text) {
        (Some(code), Some(text)) => Some(format!("{code}: {text}")),
        (Some(code), None) => Some(code.to_string()),
        (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_status_folds_error_body_into_message() {
        let body = json!({"error_code": "RESOURCE_DOES_NOT_EXIST", "message": "Cluster abc does not exist"});
        let err = ApiError::http_status(reqwest::StatusCode::BAD_REQUEST, body.to_string());
        assert_eq!(err.status_code, Some(400));
        assert!(err.message.contains("RESOURCE_DOES_NOT_EXIST"));
        assert!(err.message.contains("Cluster abc does not exist"));
        assert!(err.is_not_found());
    }

    #[test]
    fn plain_404_is_not_found() {
        let err = ApiError::http_status(reqwest::StatusCode::NOT_FOUND, String::new());
        assert!(err.is_not_found());
        assert!(err.response.is_none());
    }

    #[test]
    fn non_json_error_body_is_kept_raw() {
        let err =
            ApiError::http_status(reqwest::StatusCode::BAD_GATEWAY, "upstream exploded".into());
        assert_eq!(
            err.response,
            Some(Value::String("upstream exploded".into()))
        );
        assert!(!err.is_not_found());
    }
}
