use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug};

pub const ENV_VAR: i32 = 1;
pub const DATABASE: i32 = 2;
pub const UNEXPECTED: i32 = 5;
pub const STORE_WRITE: i32 = 10;
pub const STORE_READ: i32 = 11;
pub const MALFORMED_COORDINATE: i32 = 12;
pub const MALFORMED_MODE: i32 = 13;
pub const PROVIDER: i32 = 14;
pub const NO_ROUTE_FOUND: i32 = 15;
pub const PUBLISH: i32 = 16;
pub const INVALID_INPUT: i32 = 101;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    /// Transient failures of an external collaborator. `NoRouteFound` and
    /// malformed data are never worth a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self.code, STORE_WRITE | STORE_READ | PROVIDER | PUBLISH)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error<T: Into<String>>(message: T) -> Error {
    Error {
        code: INVALID_INPUT,
        message: message.into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: ENV_VAR,
        message: format!("environment variable error: {}", err),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!("database error: {:?}", err);

    Error {
        code: DATABASE,
        message: "database error".into(),
    }
}

pub fn unexpected_error<T: Debug>(err: T) -> Error {
    tracing::error!("unexpected error: {:?}", err);

    Error {
        code: UNEXPECTED,
        message: "unexpected error".into(),
    }
}

pub fn store_write_error<T: Debug>(err: T) -> Error {
    tracing::error!("failed to write order field: {:?}", err);

    Error {
        code: STORE_WRITE,
        message: "store write error".into(),
    }
}

pub fn store_read_error<T: Debug>(err: T) -> Error {
    tracing::error!("failed to read order field: {:?}", err);

    Error {
        code: STORE_READ,
        message: "store read error".into(),
    }
}

pub fn malformed_coordinate_error(value: &str) -> Error {
    tracing::error!("malformed coordinate in store: {:?}", value);

    Error {
        code: MALFORMED_COORDINATE,
        message: format!("malformed coordinate: {:?}", value),
    }
}

pub fn malformed_mode_error(value: &str) -> Error {
    tracing::error!("malformed travel mode in store: {:?}", value);

    Error {
        code: MALFORMED_MODE,
        message: format!("malformed travel mode: {:?}", value),
    }
}

pub fn provider_error<T: Debug>(err: T) -> Error {
    tracing::warn!("directions provider error: {:?}", err);

    Error {
        code: PROVIDER,
        message: "directions provider error".into(),
    }
}

pub fn no_route_found_error() -> Error {
    tracing::warn!("no route found");

    Error {
        code: NO_ROUTE_FOUND,
        message: "no route found".into(),
    }
}

pub fn publish_error<T: Debug>(err: T) -> Error {
    tracing::error!("failed to publish travel time: {:?}", err);

    Error {
        code: PUBLISH,
        message: "publish error".into(),
    }
}

#[test]
fn retryable_kinds() {
    assert!(provider_error("quota").is_retryable());
    assert!(store_read_error("timeout").is_retryable());
    assert!(store_write_error("timeout").is_retryable());
    assert!(publish_error("refused").is_retryable());

    assert!(!no_route_found_error().is_retryable());
    assert!(!malformed_coordinate_error("x").is_retryable());
    assert!(!invalid_input_error("bad").is_retryable());
}

#[test]
fn internal_errors_hide_message() {
    let response = store_read_error("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = invalid_input_error("unknown order").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
