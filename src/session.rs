//! The read-eval-print loop.

use std::borrow::Cow;
use std::io::BufRead;

use log::{info, warn};

use crate::error::TaskpadError;
use crate::output::Ui;
use crate::parser;
use crate::task::TaskList;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `bye`.
    Bye,
    /// Input ran out before `bye`.
    EndOfInput,
}

/// One interactive session over a task list.
pub struct Session<U: Ui> {
    tasks: TaskList,
    ui: U,
    greeting: bool,
}

impl<U: Ui> Session<U> {
    pub const fn new(tasks: TaskList, ui: U) -> Self {
        Self {
            tasks,
            ui,
            greeting: true,
        }
    }

    /// Skip the welcome banner.
    #[must_use]
    pub const fn without_greeting(mut self) -> Self {
        self.greeting = false;
        self
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Read commands from `input` until `bye` or end of input.
    ///
    /// A bad command is reported through the [`Ui`] and the loop carries on.
    /// Bytes that are not UTF-8 are replaced with U+FFFD, so such a line is
    /// just another unrecognized command.
    ///
    /// # Errors
    ///
    /// Returns `TaskpadError::Io` if reading `input` fails. Tasks changed
    /// before the failure stay in the session.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionEnd, TaskpadError> {
        info!(
            "event=session_start module=session status=ok tasks={}",
            self.tasks.len()
        );
        if self.greeting {
            self.ui.show_greeting();
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = decode_line(&buf);
            match parser::parse_input(&line, &mut self.tasks, &mut self.ui) {
                Ok(true) => {}
                Ok(false) => {
                    info!(
                        "event=session_end module=session status=ok reason=bye tasks={}",
                        self.tasks.len()
                    );
                    return Ok(SessionEnd::Bye);
                }
                Err(e) => {
                    warn!(
                        "event=command_rejected module=session kind={:?}",
                        e.kind()
                    );
                    self.ui.show_error(&e);
                }
            }
        }

        info!(
            "event=session_end module=session status=ok reason=eof tasks={}",
            self.tasks.len()
        );
        Ok(SessionEnd::EndOfInput)
    }

    /// End the session, giving back the list and the output sink.
    pub fn finish(self) -> (TaskList, U) {
        (self.tasks, self.ui)
    }
}

/// One raw input line without its line ending.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
