//! Calct CLI - command-line front end for the calc expression tokenizer.
//!
//! This is the main entry point for the calct CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{CalctError, Result};

/// Calct - tokenize and validate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "calct")]
#[command(author = "Calc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and validate arithmetic expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CALCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CALCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CALCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the calct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of an expression
    ///
    /// Reads the expression from the argument, else from --file, else
    /// from standard input.
    Lex(LexCommand),

    /// Validate expressions without printing tokens
    Check(CheckCommand),

    /// Write a default calct.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Expression to tokenize
    expression: Option<String>,

    /// Read the expression from a file
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Separator between tokens in plain output (default: from config)
    #[arg(long)]
    separator: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Expression to validate
    expression: Option<String>,

    /// Read the expression(s) from a file
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Validate every non-blank line as its own expression
    #[arg(long)]
    lines: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write calct.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing calct.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging, loads configuration and executes the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CalctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            let lex_args = LexArgs {
                expression: args.expression,
                file: args.file,
                format: args.format,
                separator: args.separator,
            };
            run_lex(lex_args, config)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                expression: args.expression,
                file: args.file,
                lines: args.lines,
            };
            run_check(check_args)
        },
        Commands::Init(args) => run_init(InitArgs {
            path: args.path,
            force: args.force,
        }),
    }
}
