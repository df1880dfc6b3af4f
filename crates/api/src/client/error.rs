//! Failures talking to the clinic backend

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable response: connection refused, CORS, DNS, or an unreadable body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status outside the 400/401/403/404 family
    #[error("backend error {status}: {detail}")]
    Backend { status: u16, detail: String },

    /// Missing, expired or wrong credentials (401)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Signed in, but the role may not do this (403)
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Validation or business-rule refusal (400)
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

/// FastAPI error body: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// The human-readable part of an error response body
fn extract_detail(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        // Validation errors carry a list of field problems
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

impl ClientError {
    /// Classify an error response by status, keeping the backend's `detail`
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let detail = extract_detail(status, body);
        match status.as_u16() {
            400 => Self::BadRequest(detail),
            401 => Self::Unauthorized(detail),
            403 => Self::Forbidden(detail),
            404 => Self::NotFound(detail),
            code => Self::Backend {
                status: code,
                detail,
            },
        }
    }

    /// True when the request never produced an HTTP response (server down,
    /// CORS rejection, DNS failure). A response that arrived but failed to
    /// decode does not count.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Transport(e) => e.status().is_none() && !e.is_decode(),
            _ => false,
        }
    }

    /// True when the backend refused the submitted credentials or payload
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::BadRequest(_) | Self::Unauthorized(_) | Self::Forbidden(_) | Self::NotFound(_)
        )
    }

    /// The backend's own explanation, when it sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. }
            | Self::Unauthorized(detail)
            | Self::Forbidden(detail)
            | Self::NotFound(detail)
            | Self::BadRequest(detail) => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastapi_detail_is_extracted() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Doctor is already verified"}"#,
        );
        assert!(matches!(&err, ClientError::BadRequest(d) if d == "Doctor is already verified"));
        assert_eq!(err.detail(), Some("Doctor is already verified"));
    }

    #[test]
    fn plain_and_empty_bodies() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "  upstream down \n");
        assert!(matches!(err, ClientError::Backend { status: 502, ref detail } if detail == "upstream down"));

        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, ClientError::Unauthorized(ref d) if d == "Unauthorized"));
    }

    #[test]
    fn validation_lists_are_kept_as_json() {
        let err = ClientError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#,
        );
        match err {
            ClientError::Backend { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejection_classification() {
        assert!(ClientError::from_response(StatusCode::FORBIDDEN, "").is_rejection());
        assert!(!ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "").is_rejection());
        assert!(!ClientError::Configuration("nope".into()).is_rejection());
        assert!(!ClientError::Configuration("nope".into()).is_unreachable());
    }
}
