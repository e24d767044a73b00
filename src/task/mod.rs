//! Task model and the ordered task list.
//!
//! Tasks come in three kinds (plain, deadline, event). Date-time fields are
//! parsed here, so a task never holds an invalid date.

pub mod datetime;
mod list;
mod types;

pub use list::TaskList;
pub use types::{Task, TaskKind};
