//! API surface for the trivia question bank.
//!
//! # Responsibility
//! - Parse raw request inputs (query strings, JSON bodies).
//! - Call core services and translate results into status code + JSON
//!   envelopes.
//!
//! # Invariants
//! - Handlers never panic; every outcome is an `ApiResponse`.
//! - Status codes are decided here only, never in `trivia_core`.

pub mod envelope;
pub mod handlers;
pub mod quiz_request;

pub use envelope::{status_code, ApiResponse};
pub use handlers::TriviaApi;
pub use quiz_request::{QuizRequest, ALL_CATEGORIES_SENTINELS};
