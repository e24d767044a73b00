//! Storage layer for taskpad.
//!
//! This module provides SQLite-based persistence for the task list.

mod migrations;
mod task_store;

pub use task_store::TaskStore;
