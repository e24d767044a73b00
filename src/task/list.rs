//! The ordered task list the interpreter operates on.

use crate::error::CommandError;

use super::datetime::parse_datetime;
use super::types::{Task, TaskKind};

/// An ordered list of tasks.
///
/// Positions exposed by the index operations are 1-based. Callers are
/// expected to have checked `1 <= index <= len()` first; an index outside
/// that range is a bug in the caller and panics.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in list order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The most recently appended task.
    #[must_use]
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    /// Mark the task at a 1-based `index` as done.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `1..=len()`.
    pub fn mark_task(&mut self, index: usize) -> &Task {
        let task = &mut self.tasks[index - 1];
        task.mark_done();
        task
    }

    /// Mark the task at a 1-based `index` as not done.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `1..=len()`.
    pub fn unmark_task(&mut self, index: usize) -> &Task {
        let task = &mut self.tasks[index - 1];
        task.mark_not_done();
        task
    }

    /// Remove and return the task at a 1-based `index`.
    ///
    /// Later tasks move down one position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `1..=len()`.
    pub fn delete_task(&mut self, index: usize) -> Task {
        self.tasks.remove(index - 1)
    }

    /// Append a plain task.
    pub fn add_todo(&mut self, description: &str) -> &Task {
        self.push(Task::new(description, TaskKind::Todo))
    }

    /// Append a task due by `by`, given as `yyyy-mm-dd hh:mm`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedDateTime`] if `by` does not parse.
    /// Nothing is appended in that case.
    pub fn add_deadline(&mut self, description: &str, by: &str) -> Result<&Task, CommandError> {
        let due_at =
            parse_datetime(by).ok_or(CommandError::MalformedDateTime { field: "/by field" })?;
        Ok(self.push(Task::new(description, TaskKind::Deadline { due_at })))
    }

    /// Append an event running from `from` to `to`, both `yyyy-mm-dd hh:mm`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedDateTime`] if either value does not
    /// parse. Nothing is appended in that case.
    pub fn add_event(
        &mut self,
        description: &str,
        from: &str,
        to: &str,
    ) -> Result<&Task, CommandError> {
        let malformed = CommandError::MalformedDateTime {
            field: "/from and /to field",
        };
        let start_at = parse_datetime(from).ok_or_else(|| malformed.clone())?;
        let end_at = parse_datetime(to).ok_or(malformed)?;
        Ok(self.push(Task::new(description, TaskKind::Event { start_at, end_at })))
    }

    /// Tasks whose description contains `keyword`, in list order.
    ///
    /// Matching is a case-sensitive substring test.
    #[must_use]
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.description().contains(keyword))
            .collect()
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }
}
