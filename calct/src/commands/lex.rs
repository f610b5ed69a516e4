//! Lex command implementation.
//!
//! Tokenizes one expression and prints the resulting tokens.

use std::path::PathBuf;

use crate::commands::common::{read_input, render_tokens, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Expression given on the command line.
    pub expression: Option<String>,
    /// File holding the expression.
    pub file: Option<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Token separator for plain output; falls back to the configured one.
    pub separator: Option<String>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Tokenize and render, returning the text to print.
    pub fn render(&self) -> Result<String> {
        let input = read_input(self.args.expression.clone(), self.args.file.as_deref())?;
        let tokens = calc_lex::analyse(&input)?;

        let output = &self.config.output;
        let format = self.args.format.unwrap_or(output.format);
        let separator = self.args.separator.as_deref().unwrap_or(&output.separator);
        tracing::info!(tokens = tokens.len(), ?format, "expression tokenized");

        render_tokens(&tokens, format, separator, output.pretty)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
