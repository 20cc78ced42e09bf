use rusqlite::Connection;
use trivia_core::db::migrations::latest_version;
use trivia_core::db::{open_db, open_db_in_memory, seed_default_categories, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "categories");
    assert_table_exists(&conn, "questions");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    let mut conn_first = open_db(&path).unwrap();
    seed_default_categories(&mut conn_first).unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let categories: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(categories, 6);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn seeding_categories_only_fills_an_empty_table() {
    let mut conn = open_db_in_memory().unwrap();

    assert_eq!(seed_default_categories(&mut conn).unwrap(), 6);
    assert_eq!(seed_default_categories(&mut conn).unwrap(), 0);

    let first: String = conn
        .query_row("SELECT type FROM categories WHERE id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(first, "Science");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

#[test]
fn open_db_registers_unicode_fold_case() {
    let conn = open_db_in_memory().unwrap();

    let folded: String = conn
        .query_row("SELECT fold_case('ÉCOLE Straße');", [], |row| row.get(0))
        .unwrap();
    assert_eq!(folded, "école straße");
}

#[test]
fn schema_version_error_names_both_versions() {
    let err = DbError::UnsupportedSchemaVersion {
        db_version: 7,
        latest_supported: 1,
    };
    let message = err.to_string();
    assert!(message.contains("v7"));
    assert!(message.contains("v1"));
}
