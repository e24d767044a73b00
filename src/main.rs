use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use taskpad::cli::args::Cli;
use taskpad::config::{Config, Paths};
use taskpad::logging::{default_log_level, init_logging};
use taskpad::output::ConsoleUi;
use taskpad::storage::TaskStore;
use taskpad::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::resolve(cli.data_dir)?;
    paths.ensure_dirs()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();

    if !cli.no_log && config.logging.enabled {
        let level = cli
            .log_level
            .or(config.logging.level)
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, &paths.logs)?;
    }

    let store = TaskStore::open(&paths.database)?;
    let tasks = store.load().context("Failed to load saved tasks")?;

    let format = cli.output.unwrap_or(config.general.default_output);
    let ui = ConsoleUi::new(io::stdout().lock(), format);
    let mut session = Session::new(tasks, ui);
    if !config.general.greeting {
        session = session.without_greeting();
    }

    // Save whatever the session did, even if reading stdin failed partway.
    let outcome = session.run(io::stdin().lock());
    let (tasks, _) = session.finish();
    store.save(&tasks).context("Failed to save tasks")?;
    outcome.context("Failed to read input")?;
    Ok(())
}
