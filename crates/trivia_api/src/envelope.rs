//! Response envelopes.
//!
//! Success: `{"success": true, ...payload}` with status 200.
//! Failure: `{"success": false, "error": <code>, "message": <text>}`.

use log::error;
use serde::Serialize;
use serde_json::{json, Map, Value};
use trivia_core::ServiceError;

/// Transport-neutral response: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Wraps a payload in a success envelope.
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        let fields = match serde_json::to_value(payload) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                let mut fields = Map::new();
                fields.insert("data".to_string(), other);
                fields
            }
            Err(err) => {
                error!("event=api_encode module=api status=error error={err}");
                return Self::error(&ServiceError::Unprocessable(err.to_string()));
            }
        };

        let mut body = Map::with_capacity(fields.len() + 1);
        body.insert("success".to_string(), Value::Bool(true));
        body.extend(fields);
        Self {
            status: 200,
            body: Value::Object(body),
        }
    }

    pub fn error(err: &ServiceError) -> Self {
        let status = status_code(err);
        Self {
            status,
            body: json!({
                "success": false,
                "error": status,
                "message": message(err),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Compact JSON body text.
    pub fn body_text(&self) -> String {
        self.body.to_string()
    }
}

/// Maps a service error kind to its HTTP status code.
pub fn status_code(err: &ServiceError) -> u16 {
    match err {
        ServiceError::BadRequest(_) => 400,
        ServiceError::NotFound(_) => 404,
        ServiceError::Unprocessable(_) => 422,
    }
}

fn message(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::BadRequest(_) => "bad request",
        ServiceError::NotFound(_) => "resource not found",
        ServiceError::Unprocessable(_) => "unprocessable",
    }
}
