//! Store accessor contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the read/write operations the core needs from storage.
//! - Isolate SQL details from service orchestration.
//! - Provide an in-memory store for isolated service tests.
//!
//! # Invariants
//! - Write paths enforce `NewQuestion::validate()` before mutation.
//! - Ordered list operations return rows by `id ASC`.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   transport errors.

use crate::db::DbError;
use crate::model::question::{QuestionId, QuestionValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod memory_repo;
pub mod question_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Case folding used by every store's substring search.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Repository error shared by question and category stores.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuestionValidationError),
    Db(DbError),
    NotFound(QuestionId),
    InvalidData(String),
    /// Store could not serve the request at all.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<QuestionValidationError> for RepoError {
    fn from(value: QuestionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
