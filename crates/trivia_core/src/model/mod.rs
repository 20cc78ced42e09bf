//! Domain model for the trivia question bank.
//!
//! # Responsibility
//! - Define the canonical question/category records used by core logic.
//! - Own write-side validation for new questions.
//!
//! # Invariants
//! - Every question is identified by a store-assigned `QuestionId`.
//! - Categories are read-only from the core's perspective.

pub mod category;
pub mod question;
pub mod quiz;
