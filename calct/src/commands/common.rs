//! Common types and utilities for calct commands.
//!
//! Input acquisition and token rendering shared by `lex` and `check`.

use std::io::Read;
use std::path::Path;

use calc_lex::{Token, TokenKind};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CalctError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered tokens joined by a separator: `1.0 + 1.0`
    #[default]
    Plain,
    /// Bracketed list: `[1.0, +, 1.0]`
    List,
    /// JSON array of token objects
    Json,
}

/// JSON shape of a single token.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord {
    /// `number`, `plus`, `minus`, `times` or `divide`.
    pub kind: &'static str,

    /// Numeric value, numbers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Operator symbol, operators only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let kind = match token.kind() {
            TokenKind::Number => "number",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Times => "times",
            TokenKind::Divide => "divide",
        };
        Self {
            kind,
            value: token.value(),
            symbol: token.as_operator().map(|op| op.symbol()),
        }
    }
}

/// Renders a token list in the requested format.
pub fn render_tokens(
    tokens: &[Token],
    format: OutputFormat,
    separator: &str,
    pretty: bool,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain => join(tokens, separator),
        OutputFormat::List => format!("[{}]", join(tokens, ", ")),
        OutputFormat::Json => {
            let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
            if pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            }
        },
    };
    Ok(rendered)
}

fn join(tokens: &[Token], separator: &str) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

// ============================================================================
// Input
// ============================================================================

/// Obtains the expression text: the argument if given, else the file,
/// else standard input.
pub fn read_input(expression: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(expression) = expression {
        return Ok(expression);
    }

    if let Some(path) = file {
        if !path.is_file() {
            return Err(CalctError::Input(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_FILE,
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "reading expression from file");
        return Ok(std::fs::read_to_string(path)?);
    }

    tracing::debug!("reading expression from stdin");
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when the input path is not a readable file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";
}
