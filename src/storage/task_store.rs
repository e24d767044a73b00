//! Task list persistence.
//!
//! The whole list is loaded once before a session starts and written back in
//! one transaction when it ends.

use std::path::Path;

use log::info;
use rusqlite::{params, Connection};

use crate::error::TaskpadError;
use crate::task::datetime::{parse_datetime, to_input_string};
use crate::task::{Task, TaskKind, TaskList};

use super::migrations;

/// Reads and writes the task list.
pub struct TaskStore {
    conn: Connection,
}

/// One `tasks` row as stored.
struct StoredTask {
    position: i64,
    kind: String,
    description: String,
    done: bool,
    due_at: Option<String>,
    start_at: Option<String>,
    end_at: Option<String>,
}

impl TaskStore {
    /// Open the task database at `path`, creating the file and the `tasks`
    /// table on first use. The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Database` if the file cannot be opened or the
    /// schema cannot be brought up to date.
    pub fn open(path: &Path) -> Result<Self, TaskpadError> {
        let conn = Connection::open(path).map_err(|e| {
            TaskpadError::Database(format!("Failed to open task database {}: {e}", path.display()))
        })?;
        Self::with_connection(conn)
    }

    /// A store that lives only as long as the value, for tests and dry runs.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Database` if `SQLite` cannot create the database.
    pub fn open_in_memory() -> Result<Self, TaskpadError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TaskpadError::Database(format!("Failed to open in-memory task database: {e}"))
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, TaskpadError> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Load the saved task list, in saved order.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Database` if the query fails, or
    /// `TaskpadError::Storage` if a row cannot be turned back into a task.
    pub fn load(&self) -> Result<TaskList, TaskpadError> {
        let mut stmt = self
            .conn
            .prepare(
                r"SELECT position, kind, description, done, due_at, start_at, end_at
                  FROM tasks ORDER BY position",
            )
            .map_err(|e| TaskpadError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredTask {
                    position: row.get(0)?,
                    kind: row.get(1)?,
                    description: row.get(2)?,
                    done: row.get(3)?,
                    due_at: row.get(4)?,
                    start_at: row.get(5)?,
                    end_at: row.get(6)?,
                })
            })
            .map_err(|e| TaskpadError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            let stored =
                row.map_err(|e| TaskpadError::Database(format!("Failed to read task row: {e}")))?;
            tasks.push(stored.into_task()?);
        }

        info!(
            "event=tasks_loaded module=storage status=ok count={}",
            tasks.len()
        );
        Ok(TaskList::from_tasks(tasks))
    }

    /// Replace everything stored with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Database` if any write fails. The previously
    /// saved list is kept in that case.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TaskpadError> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| TaskpadError::Database(format!("Failed to begin transaction: {e}")))?;

        tx.execute("DELETE FROM tasks", [])
            .map_err(|e| TaskpadError::Database(format!("Failed to clear tasks: {e}")))?;

        {
            let mut stmt = tx
                .prepare(
                    r"INSERT INTO tasks
                      (position, kind, description, done, due_at, start_at, end_at)
                      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                )
                .map_err(|e| TaskpadError::Database(format!("Failed to prepare insert: {e}")))?;

            for (position, task) in tasks.tasks().iter().enumerate() {
                let position = i64::try_from(position)
                    .map_err(|e| TaskpadError::Storage(format!("Task position overflow: {e}")))?;
                let (due_at, start_at, end_at) = date_columns(task.kind());

                stmt.execute(params![
                    position,
                    task.kind().name(),
                    task.description(),
                    task.is_done(),
                    due_at,
                    start_at,
                    end_at,
                ])
                .map_err(|e| TaskpadError::Database(format!("Failed to insert task: {e}")))?;
            }
        }

        tx.commit()
            .map_err(|e| TaskpadError::Database(format!("Failed to commit tasks: {e}")))?;

        info!(
            "event=tasks_saved module=storage status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}

/// `(due_at, start_at, end_at)` column values for a task kind.
fn date_columns(kind: &TaskKind) -> (Option<String>, Option<String>, Option<String>) {
    match kind {
        TaskKind::Todo => (None, None, None),
        TaskKind::Deadline { due_at } => (Some(to_input_string(due_at)), None, None),
        TaskKind::Event { start_at, end_at } => (
            None,
            Some(to_input_string(start_at)),
            Some(to_input_string(end_at)),
        ),
    }
}

impl StoredTask {
    fn into_task(self) -> Result<Task, TaskpadError> {
        let position = self.position;
        if self.description.trim().is_empty() {
            return Err(TaskpadError::Storage(format!(
                "task at position {position} has an empty description"
            )));
        }

        let date = |column: &str, value: Option<String>| {
            value
                .as_deref()
                .and_then(parse_datetime)
                .ok_or_else(|| {
                    TaskpadError::Storage(format!(
                        "task at position {position} has a missing or invalid {column}"
                    ))
                })
        };

        let kind = match self.kind.as_str() {
            "todo" => TaskKind::Todo,
            "deadline" => TaskKind::Deadline {
                due_at: date("due_at", self.due_at)?,
            },
            "event" => TaskKind::Event {
                start_at: date("start_at", self.start_at)?,
                end_at: date("end_at", self.end_at)?,
            },
            other => {
                return Err(TaskpadError::Storage(format!(
                    "task at position {position} has unknown kind `{other}`"
                )))
            }
        };

        Ok(Task::restore(self.description, self.done, kind))
    }
}
