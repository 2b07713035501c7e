//! JSON failure contract
//!
//! Every API failure is `{"success": false, "<key>": "<message>"}` where the
//! key is `error`, except on the change-request endpoint which uses
//! `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};
use tracing::error;

use fleetbook_types::{Error, StorageError};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    key: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            key: "error",
            message: message.into(),
        }
    }

    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON format")
    }

    /// Report the message under a different JSON key
    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub(crate) fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::Unauthorized => StatusCode::FORBIDDEN,
        Error::Parse(_)
        | Error::MissingFields
        | Error::MissingFleetUpdate
        | Error::MissingIndex
        | Error::MissingTableUpdate
        | Error::InvalidIndex
        | Error::NoData
        | Error::MissingChangeFields
        | Error::Storage(StorageError::InvalidTableName(_)) => StatusCode::BAD_REQUEST,
        Error::FleetNotFound | Error::FileNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = status_for(&err);
        if status.is_server_error() {
            error!(error = %err, "request failed");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert(self.key.to_string(), Value::String(self.message));
        (self.status, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetbook_types::{NotifyError, ParseError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::Unauthorized), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(&Error::Parse(ParseError::MissingMetadata)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&Error::InvalidIndex), StatusCode::BAD_REQUEST);
        let encode_failure = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            status_for(&Error::Json(encode_failure)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_for(&Error::FleetNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&Error::Notify(NotifyError::NotConfigured)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&Error::Storage(StorageError::InvalidTableName("..".to_string()))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_message_comes_from_error() {
        let api: ApiError = Error::Parse(ParseError::MissingMetadata).into();
        assert_eq!(api.message(), "Missing livery or operator");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }
}
