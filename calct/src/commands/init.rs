//! Init command implementation.
//!
//! Writes a `calct.toml` holding the default configuration, so that users
//! have a file to edit.

use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CalctError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Path of the configuration file this command writes.
    pub fn target(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let target = self.target();
        if target.exists() && !self.args.force {
            return Err(CalctError::Config(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                target.display()
            )));
        }

        Config::default().save_to_path(&target)?;
        tracing::info!(path = %target.display(), "wrote default configuration");
        println!("Created {}", target.display());
        Ok(())
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).run()
}
