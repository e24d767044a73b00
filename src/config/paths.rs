//! Path resolution for taskpad configuration and data files.
//!
//! All taskpad data is stored in `~/.taskpad/` unless another root is given:
//! - `config.yaml` - Main configuration file
//! - `tasks.db` - SQLite database holding the task list
//! - `logs/` - Rotating log files

use std::path::PathBuf;

use crate::error::TaskpadError;

/// Paths to taskpad configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskpad/`
    pub root: PathBuf,
    /// Config file: `~/.taskpad/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.taskpad/tasks.db`
    pub database: PathBuf,
    /// Logs directory: `~/.taskpad/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskpadError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskpadError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskpad")))
    }

    /// Use `root` when given, otherwise the home-directory default.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, TaskpadError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("tasks.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskpadError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TaskpadError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskpad"))
        })
    }
}
