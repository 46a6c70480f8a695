//! Command implementations for focuswave.
//!
//! Every handler returns the text to print; `main` does the printing.

mod config;
mod focus;

pub use config::config;
pub use focus::{history, record, start, stats, streak, titles};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, Paths};
use crate::core::SystemClock;
use crate::error::FocusError;
use crate::features::focus::FocusController;
use crate::storage::Database;

/// Resolved paths, configuration, and output format shared by all commands.
pub struct Context {
    /// Data directory layout.
    pub paths: Paths,
    /// Loaded configuration.
    pub config: Config,
    /// Output format for this invocation.
    pub format: OutputFormat,
}

impl Context {
    /// Resolve paths, load the config, and pick the output format.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or the
    /// config file is invalid.
    pub fn load(cli: &Cli) -> Result<Self, FocusError> {
        let paths = Paths::resolve(cli.home.as_deref())?;
        let config = Config::load(&paths)?;
        config.general.color.apply();
        let format = cli.output.unwrap_or(config.general.default_output);

        Ok(Self {
            paths,
            config,
            format,
        })
    }

    /// Open the on-disk store and build a controller for today.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn controller(&self) -> Result<FocusController<Database, SystemClock>, FocusError> {
        let db = Database::open(&self.paths)?;
        Ok(FocusController::new(
            db,
            SystemClock,
            self.config.focus.default_minutes,
        ))
    }
}

/// Generate shell completions for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, FocusError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focuswave", &mut buf);
    String::from_utf8(buf).map_err(|e| FocusError::InvalidInput(format!("UTF-8 error: {e}")))
}
