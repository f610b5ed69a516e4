//! Check command implementation.
//!
//! Validates expressions without printing their tokens, either the whole
//! input as one expression or each non-blank line on its own.

use std::path::PathBuf;

use calc_lex::LexError;

use crate::commands::common::read_input;
use crate::error::{CalctError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Expression given on the command line.
    pub expression: Option<String>,
    /// File holding the expression(s).
    pub file: Option<PathBuf>,
    /// Check every non-blank line separately.
    pub lines: bool,
}

/// Outcome for one line of a multi-line check.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// 1-based line number.
    pub line: usize,
    /// `None` when the line was accepted.
    pub error: Option<LexError>,
}

impl LineReport {
    fn message(&self) -> String {
        match &self.error {
            None => format!("line {}: ok", self.line),
            Some(err) => format!("line {}: {}", self.line, err),
        }
    }
}

/// Checks each non-blank line of `text`.
pub fn check_lines(text: &str) -> Vec<LineReport> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| LineReport {
            line: i + 1,
            error: calc_lex::analyse(line).err(),
        })
        .collect()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let input = read_input(args.expression, args.file.as_deref())?;

    if !args.lines {
        calc_lex::analyse(&input)?;
        println!("ok");
        return Ok(());
    }

    let reports = check_lines(&input);
    for report in &reports {
        println!("{}", report.message());
    }

    let total = reports.len();
    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    tracing::info!(total, failed, "line check finished");
    println!("checked {} expression(s), {} rejected", total, failed);

    if failed > 0 {
        return Err(CalctError::Check { failed, total });
    }
    Ok(())
}
