//! Error types for taskpad.
//!
//! Two layers:
//! - [`CommandError`] is a user mistake on one input line. It is reported and
//!   the session carries on.
//! - [`TaskpadError`] is a process-level failure (config, storage, I/O) that
//!   ends the program.

use serde::Serialize;
use thiserror::Error;

/// Usage shown when a `deadline` command is malformed.
pub const DEADLINE_USAGE: &str = "deadline [description] /by [yyyy-mm-dd hh:mm]";

/// Usage shown when an `event` command is malformed.
pub const EVENT_USAGE: &str =
    "event [description] /from [yyyy-mm-dd hh:mm] /to [yyyy-mm-dd hh:mm]";

/// Broad category of a [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The first word is not a known command.
    UnrecognizedCommand,
    /// An index command got more than one argument.
    ArgumentCount,
    /// A required field is blank or absent, or the command is mis-shaped.
    MissingField,
    /// An index argument is not an integer.
    NonNumericIndex,
    /// An index argument does not name an existing task.
    IndexOutOfRange,
    /// A date-time field is not `yyyy-mm-dd hh:mm`.
    MalformedDateTime,
}

/// A validation failure for a single input line.
///
/// Nothing in the task list changes when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Sorry, I don't understand what that means.")]
    Unrecognized,

    #[error("Sorry, please only include one numeric argument after {command}.")]
    TooManyArguments { command: &'static str },

    #[error("Sorry, please state a list index to {command}.")]
    MissingIndex { command: &'static str },

    #[error("Sorry, please use a numeric list index to {command}.")]
    NonNumericIndex { command: &'static str },

    #[error("Sorry, there's no task at that index.")]
    NoTaskAtIndex,

    #[error("Sorry, the task description cannot be empty.")]
    EmptyDescription,

    #[error("Sorry, please use the format: {usage}")]
    BadFormat { usage: &'static str },

    #[error("Sorry, the /by field cannot be empty.")]
    EmptyBy,

    #[error("Sorry, please remember to include the /from and /to fields.")]
    MissingFromTo,

    #[error("Sorry, the /from and /to fields cannot be empty.")]
    EmptyFromTo,

    #[error("Sorry, the keyword cannot be empty.")]
    EmptyKeyword,

    #[error("Sorry, the {field} datetime should use the format [yyyy-mm-dd hh:mm].")]
    MalformedDateTime { field: &'static str },
}

impl CommandError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unrecognized => ErrorKind::UnrecognizedCommand,
            Self::TooManyArguments { .. } => ErrorKind::ArgumentCount,
            Self::MissingIndex { .. }
            | Self::EmptyDescription
            | Self::BadFormat { .. }
            | Self::EmptyBy
            | Self::MissingFromTo
            | Self::EmptyFromTo
            | Self::EmptyKeyword => ErrorKind::MissingField,
            Self::NonNumericIndex { .. } => ErrorKind::NonNumericIndex,
            Self::NoTaskAtIndex => ErrorKind::IndexOutOfRange,
            Self::MalformedDateTime { .. } => ErrorKind::MalformedDateTime,
        }
    }
}

/// Process-level errors.
#[derive(Error, Debug)]
pub enum TaskpadError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt task data: {0}")]
    Storage(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),
}
