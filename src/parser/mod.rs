//! Command parser for the interactive prompt.
//!
//! Each input line is validated into a [`Command`] and then dispatched to the
//! [`TaskList`] exactly once. A validation failure leaves the list untouched.
//!
//! Supported commands:
//! - `bye`, `list`
//! - `mark <n>`, `unmark <n>`, `delete <n>`
//! - `todo <description>`
//! - `deadline <description> /by <yyyy-mm-dd hh:mm>`
//! - `event <description> /from <yyyy-mm-dd hh:mm> /to <yyyy-mm-dd hh:mm>`
//! - `find <keyword>`

mod command;
mod validate;

pub use command::Command;
pub use validate::EventFields;

use log::debug;

use crate::error::CommandError;
use crate::output::Ui;
use crate::task::TaskList;

/// Parse one input line and run it against `tasks`, reporting through `ui`.
///
/// Returns `Ok(false)` when the line is `bye` and the session should stop,
/// `Ok(true)` otherwise.
///
/// # Errors
///
/// Returns a [`CommandError`] if the line is not a valid command or a
/// date-time argument is malformed. `tasks` is unchanged in that case.
pub fn parse_input(
    input: &str,
    tasks: &mut TaskList,
    ui: &mut dyn Ui,
) -> Result<bool, CommandError> {
    let command = Command::parse(input, tasks.len())?;
    debug!("event=command_parsed module=parser command={}", command.name());
    execute(command, tasks, ui)
}

/// Run an already validated command.
///
/// # Errors
///
/// Returns [`CommandError::MalformedDateTime`] if a deadline or event date
/// does not parse.
pub fn execute(
    command: Command<'_>,
    tasks: &mut TaskList,
    ui: &mut dyn Ui,
) -> Result<bool, CommandError> {
    match command {
        Command::Bye => {
            ui.show_farewell();
            return Ok(false);
        }
        Command::List => ui.show_list(tasks.tasks()),
        Command::Mark(index) => ui.show_marked(tasks.mark_task(index)),
        Command::Unmark(index) => ui.show_unmarked(tasks.unmark_task(index)),
        Command::Delete(index) => {
            let removed = tasks.delete_task(index);
            ui.show_deleted(&removed, tasks.len());
        }
        Command::Todo { description } => {
            tasks.add_todo(description);
            report_added(tasks, ui);
        }
        Command::Deadline { description, by } => {
            tasks.add_deadline(description, by)?;
            report_added(tasks, ui);
        }
        Command::Event(EventFields {
            description,
            from,
            to,
        }) => {
            tasks.add_event(description, from, to)?;
            report_added(tasks, ui);
        }
        Command::Find { keyword } => ui.show_matches(&tasks.find_by_keyword(keyword)),
    }

    Ok(true)
}

fn report_added(tasks: &TaskList, ui: &mut dyn Ui) {
    if let Some(task) = tasks.last() {
        ui.show_added(task, tasks.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::datetime::parse_datetime;
    use crate::task::{Task, TaskKind};

    /// Records what the parser asked the sink to show.
    #[derive(Default)]
    struct RecordingUi {
        events: Vec<String>,
    }

    impl Ui for RecordingUi {
        fn show_greeting(&mut self) {
            self.events.push("greeting".to_string());
        }

        fn show_farewell(&mut self) {
            self.events.push("farewell".to_string());
        }

        fn show_added(&mut self, task: &Task, total: usize) {
            self.events.push(format!("added {task} ({total})"));
        }

        fn show_marked(&mut self, task: &Task) {
            self.events.push(format!("marked {task}"));
        }

        fn show_unmarked(&mut self, task: &Task) {
            self.events.push(format!("unmarked {task}"));
        }

        fn show_deleted(&mut self, task: &Task, remaining: usize) {
            self.events.push(format!("deleted {task} ({remaining})"));
        }

        fn show_list(&mut self, tasks: &[Task]) {
            self.events.push(format!("list {}", tasks.len()));
        }

        fn show_matches(&mut self, matches: &[&Task]) {
            let names: Vec<&str> = matches.iter().map(|task| task.description()).collect();
            self.events.push(format!("matches {}", names.join(",")));
        }

        fn show_error(&mut self, error: &CommandError) {
            self.events.push(format!("error {error}"));
        }
    }

    fn run(lines: &[&str]) -> (TaskList, RecordingUi, Vec<Result<bool, CommandError>>) {
        let mut tasks = TaskList::new();
        let mut ui = RecordingUi::default();
        let results = lines
            .iter()
            .map(|line| parse_input(line, &mut tasks, &mut ui))
            .collect();
        (tasks, ui, results)
    }

    #[test]
    fn test_bye_stops() {
        let (_, ui, results) = run(&["bye"]);
        assert_eq!(results, vec![Ok(false)]);
        assert_eq!(ui.events, vec!["farewell"]);
    }

    #[test]
    fn test_other_commands_continue() {
        let (_, _, results) = run(&["todo a", "list", "mark 1", "unmark 1", "find a", "delete 1"]);
        assert!(results.iter().all(|result| *result == Ok(true)));
    }

    #[test]
    fn test_todo_reports_added_with_total() {
        let (tasks, ui, _) = run(&["todo read book", "todo buy milk"]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(
            ui.events,
            vec!["added [T][ ] read book (1)", "added [T][ ] buy milk (2)"]
        );
    }

    #[test]
    fn test_whitespace_todo_is_rejected() {
        let (tasks, ui, results) = run(&["todo   "]);
        assert_eq!(results, vec![Err(CommandError::EmptyDescription)]);
        assert!(tasks.is_empty());
        assert!(ui.events.is_empty());
    }

    #[test]
    fn test_deadline_round_trip() {
        let (tasks, _, results) = run(&["deadline read book /by 2024-03-15 18:00"]);
        assert_eq!(results, vec![Ok(true)]);
        let task = &tasks.tasks()[0];
        assert_eq!(task.description(), "read book");
        assert_eq!(
            *task.kind(),
            TaskKind::Deadline {
                due_at: parse_datetime("2024-03-15 18:00").unwrap()
            }
        );
    }

    #[test]
    fn test_malformed_deadline_date() {
        let (tasks, _, results) = run(&["todo a", "deadline x /by tomorrow"]);
        assert_eq!(
            results[1],
            Err(CommandError::MalformedDateTime { field: "/by field" })
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_event_marker_order_does_not_matter() {
        let (tasks, _, _) = run(&[
            "event meeting /to 2024-01-02 10:00 /from 2024-01-01 09:00",
            "event meeting /from 2024-01-01 09:00 /to 2024-01-02 10:00",
        ]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.tasks()[0], tasks.tasks()[1]);
        assert_eq!(
            *tasks.tasks()[0].kind(),
            TaskKind::Event {
                start_at: parse_datetime("2024-01-01 09:00").unwrap(),
                end_at: parse_datetime("2024-01-02 10:00").unwrap(),
            }
        );
    }

    #[test]
    fn test_malformed_event_date() {
        let (tasks, _, results) = run(&["event party /from 2024-01-01 25:00 /to 2024-01-02 10:00"]);
        assert_eq!(
            results,
            vec![Err(CommandError::MalformedDateTime {
                field: "/from and /to field"
            })]
        );
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_mark_bounds() {
        let (tasks, _, results) = run(&["mark 1", "todo a", "mark 0", "mark 2", "mark 1"]);
        assert_eq!(results[0], Err(CommandError::NoTaskAtIndex));
        assert_eq!(results[2], Err(CommandError::NoTaskAtIndex));
        assert_eq!(results[3], Err(CommandError::NoTaskAtIndex));
        assert_eq!(results[4], Ok(true));
        assert!(tasks.tasks()[0].is_done());
    }

    #[test]
    fn test_mark_unmark_reports() {
        let (tasks, ui, _) = run(&["todo a", "mark 1", "unmark 1"]);
        assert!(!tasks.tasks()[0].is_done());
        assert_eq!(ui.events[1], "marked [T][X] a");
        assert_eq!(ui.events[2], "unmarked [T][ ] a");
    }

    #[test]
    fn test_delete_reports_remaining() {
        let (tasks, ui, _) = run(&["todo a", "todo b", "todo c", "delete 2"]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(ui.events[3], "deleted [T][ ] b (2)");
        assert_eq!(tasks.tasks()[1].description(), "c");
    }

    #[test]
    fn test_find() {
        let (_, ui, _) = run(&["todo read book", "todo buy milk", "mark 1", "find book"]);
        assert_eq!(ui.events[3], "matches read book");
    }

    #[test]
    fn test_find_without_match_is_not_an_error() {
        let (_, ui, results) = run(&["todo read book", "find zebra"]);
        assert_eq!(results[1], Ok(true));
        assert_eq!(ui.events[1], "matches ");
    }

    #[test]
    fn test_list() {
        let (_, ui, _) = run(&["list", "todo a", "list"]);
        assert_eq!(ui.events, vec!["list 0", "added [T][ ] a (1)", "list 1"]);
    }

    #[test]
    fn test_errors_do_not_mutate() {
        let (tasks, _, results) = run(&[
            "todo a",
            "mark 1 2",
            "delete x",
            "deadline /by 2024-01-01 10:00",
            "event e /from 2024-01-01 10:00",
            "find",
            "nonsense",
        ]);
        assert!(results[1..].iter().all(Result::is_err));
        assert_eq!(tasks.len(), 1);
        assert!(!tasks.tasks()[0].is_done());
    }
}
