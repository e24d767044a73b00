use colored::Colorize;

use crate::error::CommandError;
use crate::task::Task;

const RULE_WIDTH: usize = 60;

/// Greeting printed when a session starts.
pub fn format_greeting_pretty() -> String {
    format!(
        "{}\nHello! I'm {}.\nWhat can I do for you?",
        "─".repeat(RULE_WIDTH),
        "taskpad".bold()
    )
}

/// Message printed when the user says `bye`.
pub fn format_farewell_pretty() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

/// One task with a colored status box.
pub fn format_task_pretty(task: &Task) -> String {
    let status_icon = if task.is_done() {
        task.status_icon().green()
    } else {
        task.status_icon().white()
    };

    let mut line = format!("[{}]{} {}", task.kind().code(), status_icon, task.description());
    let suffix = task.schedule_suffix();
    if !suffix.is_empty() {
        line.push_str(&suffix.yellow().to_string());
    }
    line
}

pub fn format_added_pretty(task: &Task, total: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\n{}",
        format_task_pretty(task),
        count_line(total)
    )
}

pub fn format_marked_pretty(task: &Task) -> String {
    format!(
        "Nice! I've marked this task as done:\n  {}",
        format_task_pretty(task)
    )
}

pub fn format_unmarked_pretty(task: &Task) -> String {
    format!(
        "OK, I've marked this task as not done yet:\n  {}",
        format_task_pretty(task)
    )
}

pub fn format_deleted_pretty(task: &Task, remaining: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\n{}",
        format_task_pretty(task),
        count_line(remaining)
    )
}

/// Numbered task list, or a short note when there is nothing to show.
pub fn format_tasks_pretty<'a>(
    tasks: impl ExactSizeIterator<Item = &'a Task>,
    title: &str,
    empty: &str,
) -> String {
    if tasks.len() == 0 {
        return empty.dimmed().to_string();
    }

    let mut output = format!("{title}\n");
    for (position, task) in tasks.enumerate() {
        output.push_str(&format!("{}. {}\n", position + 1, format_task_pretty(task)));
    }
    output.pop();
    output
}

pub fn format_error_pretty(error: &CommandError) -> String {
    error.to_string().red().to_string()
}

fn count_line(total: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("Now you have {total} {noun} in the list.")
}
