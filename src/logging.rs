//! File logging bootstrap.
//!
//! Logs go to rotating files under the data directory, never to stdout, so
//! they cannot interleave with the session output. Events carry metadata
//! only (command names, counts, error kinds); task descriptions are not
//! logged.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::TaskpadError;

const LOG_FILE_BASENAME: &str = "taskpad";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start file logging at `level` in `log_dir`.
///
/// Calling this again with the same arguments is a no-op.
///
/// # Errors
///
/// Returns `TaskpadError::Logging` if `level` is not a known level, if
/// logging was already started with different arguments, or if the log
/// directory or backend cannot be set up.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), TaskpadError> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, TaskpadError> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            TaskpadError::Logging(format!(
                "failed to create log directory {}: {e}",
                log_dir.display()
            ))
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|e| TaskpadError::Logging(format!("invalid log level `{level}`: {e}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| TaskpadError::Logging(format!("failed to start logger: {e}")))?;

        info!(
            "event=logging_start module=logging status=ok level={level} version={}",
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir || state.level != level {
        return Err(TaskpadError::Logging(format!(
            "logging already started at {} with level `{}`",
            state.log_dir.display(),
            state.level
        )));
    }

    Ok(())
}

/// Level used when neither the command line nor the config names one.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
#[must_use]
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, TaskpadError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(TaskpadError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}
