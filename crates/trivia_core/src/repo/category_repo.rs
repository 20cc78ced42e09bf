//! Category store accessor and SQLite implementation.

use crate::model::category::{Category, CategoryId};
use crate::repo::RepoResult;
use rusqlite::Connection;

/// Read-only access to question categories.
pub trait CategoryRepository {
    /// Lists all categories ordered by id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn category_exists(&self, id: CategoryId) -> RepoResult<bool>;
}

impl<T: CategoryRepository + ?Sized> CategoryRepository for &T {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        (**self).list_categories()
    }

    fn category_exists(&self, id: CategoryId) -> RepoResult<bool> {
        (**self).category_exists(id)
    }
}

/// SQLite-backed category store.
#[derive(Clone, Copy)]
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                kind: row.get("type")?,
            });
        }

        Ok(categories)
    }

    fn category_exists(&self, id: CategoryId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}
