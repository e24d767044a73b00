//! taskpad - a prompt-driven personal task tracker
//!
//! This crate reads one command per line, validates it, applies it to an
//! ordered task list, and reports the result. The list is kept in a local
//! `SQLite` database between sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod session;
pub mod storage;
pub mod task;

pub use cli::args::{Cli, OutputFormat};
pub use error::{CommandError, ErrorKind, TaskpadError};
pub use session::{Session, SessionEnd};
pub use task::{Task, TaskKind, TaskList};
