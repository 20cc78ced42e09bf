//! SQLite bootstrap: connection setup, migrations and category seeding.
//! Nothing reads `questions`/`categories` before `apply_migrations` succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod seed;

pub use open::{open_db, open_db_in_memory};
pub use seed::{seed_default_categories, DEFAULT_CATEGORIES};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build than this one.
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "trivia schema v{db_version} is unknown to this build (newest v{latest_supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
