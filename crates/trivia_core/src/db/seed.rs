//! Default category seeding.

use super::DbResult;
use log::info;
use rusqlite::{params, Connection};

/// The classic trivia category set, in id order starting at 1.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Inserts [`DEFAULT_CATEGORIES`] when the `categories` table is empty.
///
/// Returns the number of inserted rows (0 when categories already exist).
pub fn seed_default_categories(conn: &mut Connection) -> DbResult<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for (index, label) in DEFAULT_CATEGORIES.iter().enumerate() {
        tx.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2);",
            params![index as i64 + 1, label],
        )?;
    }
    tx.commit()?;

    info!(
        "event=categories_seed module=db status=ok inserted={}",
        DEFAULT_CATEGORIES.len()
    );
    Ok(DEFAULT_CATEGORIES.len())
}
