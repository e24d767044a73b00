use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(about = "A prompt-driven personal task tracker")]
#[command(long_about = "taskpad - a prompt-driven personal task tracker

Type commands at the prompt, one per line:

  todo <description>
  deadline <description> /by <yyyy-mm-dd hh:mm>
  event <description> /from <yyyy-mm-dd hh:mm> /to <yyyy-mm-dd hh:mm>
  list                 Show every task
  find <keyword>       Show tasks whose description contains the keyword
  mark <n>             Mark task n as done
  unmark <n>           Mark task n as not done
  delete <n>           Remove task n
  bye                  Save and quit

Tasks are saved when the session ends.")]
#[command(version)]
pub struct Cli {
    /// Output format for responses
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for one JSON document per line.
    /// Defaults to the configured format.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory holding the config file, task database, and logs
    #[arg(long, env = "TASKPAD_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,
}

/// Output format for responses.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
