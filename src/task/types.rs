use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::datetime::to_display_string;

/// What sort of task this is, with the fields that only that sort carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    /// A plain task with no date attached.
    Todo,
    /// A task due by a point in time.
    Deadline { due_at: NaiveDateTime },
    /// A task spanning a period of time.
    Event {
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    },
}

impl TaskKind {
    /// One-letter tag used in list output.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// Lowercase name, used as the storage discriminator.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

/// A single entry in the task list.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub(crate) fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    /// Rebuild a task read back from storage.
    pub(crate) fn restore(description: String, done: bool, kind: TaskKind) -> Self {
        Self {
            description,
            done,
            kind,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub(crate) fn mark_done(&mut self) {
        self.done = true;
    }

    pub(crate) fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// `[X]` when done, `[ ]` otherwise.
    #[must_use]
    pub const fn status_icon(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Date suffix shown after the description, empty for plain tasks.
    #[must_use]
    pub fn schedule_suffix(&self) -> String {
        match &self.kind {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { due_at } => format!(" (by: {})", to_display_string(due_at)),
            TaskKind::Event { start_at, end_at } => format!(
                " (from: {} to: {})",
                to_display_string(start_at),
                to_display_string(end_at)
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]{} {}{}",
            self.kind.code(),
            self.status_icon(),
            self.description,
            self.schedule_suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::datetime::parse_datetime;

    #[test]
    fn test_new_task_is_not_done() {
        let task = Task::new("read book", TaskKind::Todo);
        assert!(!task.is_done());
        assert_eq!(task.description(), "read book");
    }

    #[test]
    fn test_display_todo() {
        let mut task = Task::new("buy milk", TaskKind::Todo);
        assert_eq!(task.to_string(), "[T][ ] buy milk");
        task.mark_done();
        assert_eq!(task.to_string(), "[T][X] buy milk");
    }

    #[test]
    fn test_display_deadline() {
        let due_at = parse_datetime("2024-03-15 18:00").unwrap();
        let task = Task::new("return book", TaskKind::Deadline { due_at });
        assert_eq!(task.to_string(), "[D][ ] return book (by: Mar 15 2024 18:00)");
    }

    #[test]
    fn test_display_event() {
        let start_at = parse_datetime("2024-01-01 09:00").unwrap();
        let end_at = parse_datetime("2024-01-02 10:00").unwrap();
        let task = Task::new("meeting", TaskKind::Event { start_at, end_at });
        assert_eq!(
            task.to_string(),
            "[E][ ] meeting (from: Jan 01 2024 09:00 to: Jan 02 2024 10:00)"
        );
    }

    #[test]
    fn test_serialize_tags_kind() {
        let due_at = parse_datetime("2024-03-15 18:00").unwrap();
        let task = Task::new("return book", TaskKind::Deadline { due_at });
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["description"], "return book");
        assert_eq!(value["done"], false);
        assert_eq!(value["kind"]["type"], "deadline");
        assert_eq!(value["kind"]["due_at"], "2024-03-15T18:00:00");
    }
}
