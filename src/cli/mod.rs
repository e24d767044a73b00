//! Command-line arguments for the `taskpad` binary.

pub mod args;
