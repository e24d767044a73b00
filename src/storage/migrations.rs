//! Database migrations for taskpad.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::TaskpadError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
fn get_version(conn: &Connection) -> Result<i32, TaskpadError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| TaskpadError::Database(format!("Failed to get schema version: {e}")))
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), TaskpadError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| TaskpadError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub(crate) fn run(conn: &Connection) -> Result<(), TaskpadError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), TaskpadError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(TaskpadError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the task list.
///
/// `position` is the 0-based place in the list. Date columns hold
/// `yyyy-mm-dd hh:mm` text and are NULL where the kind has no such field.
fn migrate_v1(conn: &Connection) -> Result<(), TaskpadError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS tasks (
            position INTEGER PRIMARY KEY,
            kind TEXT NOT NULL CHECK (kind IN ('todo', 'deadline', 'event')),
            description TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            due_at TEXT,
            start_at TEXT,
            end_at TEXT
        );
        ",
    )
    .map_err(|e| TaskpadError::Database(format!("Migration v1 failed: {e}")))
}
