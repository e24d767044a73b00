use crate::error::CommandError;

use super::validate::{self, EventFields};

/// A validated command, borrowing its arguments from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Bye,
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Todo {
        description: &'a str,
    },
    Deadline {
        description: &'a str,
        by: &'a str,
    },
    Event(EventFields<'a>),
    Find {
        keyword: &'a str,
    },
}

impl<'a> Command<'a> {
    /// Identify and validate the command on one input line.
    ///
    /// `size` is the current length of the task list, used to bounds-check
    /// index arguments.
    ///
    /// # Errors
    ///
    /// Returns the first [`CommandError`] the line violates.
    pub fn parse(input: &'a str, size: usize) -> Result<Self, CommandError> {
        let line = input.trim();

        if line == "bye" {
            return Ok(Self::Bye);
        }
        if line == "list" {
            return Ok(Self::List);
        }
        if argument_of(line, "mark").is_some() {
            return validate::list_index(line, "mark", size).map(Self::Mark);
        }
        if argument_of(line, "unmark").is_some() {
            return validate::list_index(line, "unmark", size).map(Self::Unmark);
        }
        if let Some(rest) = argument_of(line, "todo") {
            let description = validate::todo_description(rest)?;
            return Ok(Self::Todo { description });
        }
        if let Some(rest) = argument_of(line, "deadline") {
            let (description, by) = validate::deadline_fields(rest)?;
            return Ok(Self::Deadline { description, by });
        }
        if let Some(rest) = argument_of(line, "event") {
            return validate::event_fields(rest).map(Self::Event);
        }
        if argument_of(line, "delete").is_some() {
            return validate::list_index(line, "delete", size).map(Self::Delete);
        }
        if let Some(rest) = argument_of(line, "find") {
            let keyword = validate::find_keyword(rest)?;
            return Ok(Self::Find { keyword });
        }

        Err(CommandError::Unrecognized)
    }

    /// Command word, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::List => "list",
            Self::Mark(_) => "mark",
            Self::Unmark(_) => "unmark",
            Self::Delete(_) => "delete",
            Self::Todo { .. } => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event(_) => "event",
            Self::Find { .. } => "find",
        }
    }
}

/// Text after `word` when `line` is `word` alone or `word` followed by a space.
fn argument_of<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(word)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix(' ')
}
