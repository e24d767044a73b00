//! Argument validation for each command family.
//!
//! Every helper returns on the first failed check, in a fixed order: piece
//! count, then blank fields, then numeric parsing, then range.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CommandError, DEADLINE_USAGE, EVENT_USAGE};

static BY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+/by\s+").unwrap_or_else(|e| panic!("Invalid /by regex: {e}")));

static EVENT_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+/from\s+|\s+/to\s+").unwrap_or_else(|e| panic!("Invalid event regex: {e}"))
});

/// Fields of a valid `event` command, already ordered as start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFields<'a> {
    pub description: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

/// Validate `mark`/`unmark`/`delete` and return the 1-based index.
///
/// `line` is the whole trimmed input, command word included.
pub fn list_index(line: &str, command: &'static str, size: usize) -> Result<usize, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() > 2 {
        return Err(CommandError::TooManyArguments { command });
    }
    let Some(raw) = tokens.get(1).filter(|token| !token.trim().is_empty()) else {
        return Err(CommandError::MissingIndex { command });
    };

    let index: i32 = raw
        .parse()
        .map_err(|_| CommandError::NonNumericIndex { command })?;

    usize::try_from(index)
        .ok()
        .filter(|index| (1..=size).contains(index))
        .ok_or(CommandError::NoTaskAtIndex)
}

/// Validate the text after `todo` and return the description.
pub fn todo_description(rest: &str) -> Result<&str, CommandError> {
    let description = rest.trim();
    if description.is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    Ok(description)
}

/// Validate the text after `deadline` and return `(description, by)`.
pub fn deadline_fields(rest: &str) -> Result<(&str, &str), CommandError> {
    let pieces = split_fields(&BY_MARKER, rest.trim());

    let [description, by] = pieces[..] else {
        return Err(CommandError::BadFormat {
            usage: DEADLINE_USAGE,
        });
    };
    if description.trim().is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    if by.trim().is_empty() {
        return Err(CommandError::EmptyBy);
    }

    Ok((description, by))
}

/// Validate the text after `event` and return its fields.
///
/// The markers may be typed in either order. Whichever value follows
/// `/from` becomes the start, and whichever follows `/to` the end.
pub fn event_fields(rest: &str) -> Result<EventFields<'_>, CommandError> {
    let rest = rest.trim();
    let pieces = split_fields(&EVENT_MARKERS, rest);

    let [description, first, second] = pieces[..] else {
        return Err(CommandError::BadFormat { usage: EVENT_USAGE });
    };
    let (Some(from_at), Some(to_at)) = (rest.find("/from"), rest.find("/to")) else {
        return Err(CommandError::MissingFromTo);
    };
    if description.trim().is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    if first.trim().is_empty() || second.trim().is_empty() {
        return Err(CommandError::EmptyFromTo);
    }

    let (from, to) = if from_at < to_at {
        (first, second)
    } else {
        (second, first)
    };

    Ok(EventFields {
        description,
        from,
        to,
    })
}

/// Validate the text after `find` and return the keyword.
pub fn find_keyword(rest: &str) -> Result<&str, CommandError> {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Err(CommandError::EmptyKeyword);
    }
    Ok(keyword)
}

/// Split on `marker`, dropping empty pieces at the end.
fn split_fields<'a>(marker: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = marker.split(text).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}
