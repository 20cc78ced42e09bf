//! Core use-case services.
//!
//! # Responsibility
//! - Compose store accessors and pagination into API-level operations.
//! - Classify every failure into one of three coarse error kinds.
//!
//! # Invariants
//! - Services never cache store reads across calls.
//! - Store errors never escape raw; they are logged and downgraded here.

use crate::repo::RepoError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod quiz_service;
pub mod trivia_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error kinds surfaced to the API layer.
///
/// The `String` payload is a diagnostic reason for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed input shape.
    BadRequest(String),
    /// The requested resource or resource set does not exist.
    NotFound(String),
    /// Well-formed request that cannot be carried out.
    Unprocessable(String),
}

impl ServiceError {
    /// Stable short label of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Unprocessable(_) => "unprocessable",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::BadRequest(reason) | Self::NotFound(reason) | Self::Unprocessable(reason) => {
                reason
            }
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.reason())
    }
}

impl Error for ServiceError {}

/// Logs a store error under `event` and downgrades it with `into`.
pub(crate) fn collapse(
    event: &'static str,
    into: fn(String) -> ServiceError,
) -> impl FnOnce(RepoError) -> ServiceError {
    move |err| {
        warn!("event={event} module=service status=error error={err}");
        into(err.to_string())
    }
}
