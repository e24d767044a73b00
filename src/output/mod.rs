//! Output for taskpad.
//!
//! The parser reports through the [`Ui`] trait. [`ConsoleUi`] renders those
//! reports either as colored text or as JSON lines.

mod json;
mod pretty;

use std::io::Write;

use log::error;

use crate::cli::args::OutputFormat;
use crate::error::{CommandError, TaskpadError};
use crate::task::Task;

pub use json::*;
pub use pretty::*;

/// Sink for everything the interpreter shows the user.
pub trait Ui {
    fn show_greeting(&mut self);
    fn show_farewell(&mut self);
    /// A task was appended; `total` is the new list size.
    fn show_added(&mut self, task: &Task, total: usize);
    fn show_marked(&mut self, task: &Task);
    fn show_unmarked(&mut self, task: &Task);
    /// A task was removed; `remaining` is the new list size.
    fn show_deleted(&mut self, task: &Task, remaining: usize);
    fn show_list(&mut self, tasks: &[Task]);
    fn show_matches(&mut self, matches: &[&Task]);
    fn show_error(&mut self, error: &CommandError);
}

/// [`Ui`] that writes to a terminal or any other writer.
pub struct ConsoleUi<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleUi<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, rendered: Result<String, TaskpadError>) {
        let result = rendered.and_then(|text| {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
            Ok(())
        });
        if let Err(e) = result {
            error!("event=output_failed module=output status=error error={e}");
        }
    }

    fn render(
        &self,
        pretty: impl FnOnce() -> String,
        json: impl FnOnce() -> Result<String, TaskpadError>,
    ) -> Result<String, TaskpadError> {
        match self.format {
            OutputFormat::Pretty => Ok(pretty()),
            OutputFormat::Json => json(),
        }
    }
}

impl<W: Write> Ui for ConsoleUi<W> {
    fn show_greeting(&mut self) {
        let rendered = self.render(format_greeting_pretty, || {
            format_notice_json("greeting", "Hello! I'm taskpad. What can I do for you?")
        });
        self.emit(rendered);
    }

    fn show_farewell(&mut self) {
        let rendered = self.render(format_farewell_pretty, || {
            format_notice_json("farewell", &format_farewell_pretty())
        });
        self.emit(rendered);
    }

    fn show_added(&mut self, task: &Task, total: usize) {
        let rendered = self.render(
            || format_added_pretty(task, total),
            || format_task_event_json("added", task, Some(total)),
        );
        self.emit(rendered);
    }

    fn show_marked(&mut self, task: &Task) {
        let rendered = self.render(
            || format_marked_pretty(task),
            || format_task_event_json("marked", task, None),
        );
        self.emit(rendered);
    }

    fn show_unmarked(&mut self, task: &Task) {
        let rendered = self.render(
            || format_unmarked_pretty(task),
            || format_task_event_json("unmarked", task, None),
        );
        self.emit(rendered);
    }

    fn show_deleted(&mut self, task: &Task, remaining: usize) {
        let rendered = self.render(
            || format_deleted_pretty(task, remaining),
            || format_task_event_json("deleted", task, Some(remaining)),
        );
        self.emit(rendered);
    }

    fn show_list(&mut self, tasks: &[Task]) {
        let rendered = self.render(
            || {
                format_tasks_pretty(
                    tasks.iter(),
                    "Here are the tasks in your list:",
                    "Your list is empty.",
                )
            },
            || format_tasks_json("list", &tasks.iter().collect::<Vec<_>>()),
        );
        self.emit(rendered);
    }

    fn show_matches(&mut self, matches: &[&Task]) {
        let rendered = self.render(
            || {
                format_tasks_pretty(
                    matches.iter().copied(),
                    "Here are the matching tasks in your list:",
                    "No matching tasks found.",
                )
            },
            || format_tasks_json("matches", matches),
        );
        self.emit(rendered);
    }

    fn show_error(&mut self, error: &CommandError) {
        let rendered = self.render(|| format_error_pretty(error), || format_error_json(error));
        self.emit(rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskList;

    fn output_of<F: FnOnce(&mut ConsoleUi<Vec<u8>>)>(format: OutputFormat, f: F) -> String {
        colored::control::set_override(false);
        let mut ui = ConsoleUi::new(Vec::new(), format);
        f(&mut ui);
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn test_pretty_added() {
        let mut list = TaskList::new();
        let task = list.add_todo("read book");
        let text = output_of(OutputFormat::Pretty, |ui| ui.show_added(task, 1));
        assert!(text.contains("[T][ ] read book"));
        assert!(text.ends_with("Now you have 1 task in the list.\n"));
    }

    #[test]
    fn test_pretty_matches_numbered_from_one() {
        let mut list = TaskList::new();
        list.add_todo("buy milk");
        list.add_todo("read book");
        let text = output_of(OutputFormat::Pretty, |ui| {
            ui.show_matches(&list.find_by_keyword("book"));
        });
        assert!(text.contains("1. [T][ ] read book"));
    }

    #[test]
    fn test_pretty_error() {
        let text = output_of(OutputFormat::Pretty, |ui| {
            ui.show_error(&CommandError::Unrecognized);
        });
        assert_eq!(text, "Sorry, I don't understand what that means.\n");
    }

    #[test]
    fn test_json_one_line_per_response() {
        let mut list = TaskList::new();
        list.add_todo("a");
        let text = output_of(OutputFormat::Json, |ui| {
            ui.show_list(list.tasks());
            ui.show_error(&CommandError::EmptyKeyword);
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let list_value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(list_value["event"], "list");
        assert_eq!(list_value["count"], 1);
        let error_value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(error_value["kind"], "missing_field");
    }
}
