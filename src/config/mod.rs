//! Configuration management for taskpad.
//!
//! This module handles loading and saving configuration from `~/.taskpad/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig};
