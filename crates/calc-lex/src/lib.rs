//! calc-lex - Lexical Analyzer for Arithmetic Expressions
//!
//! This crate turns a string such as `0.5 * 10 - 3` into a sequence of
//! tokens, validating it against a deliberately strict grammar on the way.
//!
//! # Example Usage
//!
//! ```
//! use calc_lex::{analyse, Operator, Token};
//!
//! let tokens = analyse("1 + 0.25").unwrap();
//! assert_eq!(tokens[0], Token::number(1.0));
//! assert_eq!(tokens[1], Token::operator(Operator::Plus));
//! assert_eq!(tokens[2], Token::number(0.25));
//!
//! let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
//! assert_eq!(rendered, ["1.0", "+", "0.25"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and operator definitions
//! - [`analyser`] - The [`analyse`] entry point
//! - [`machine`] - State/character-class transition table
//! - [`cursor`] - Character cursor with one character of lookahead
//! - [`error`] - Error classification
//!
//! # Grammar
//!
//! An expression is one or more numbers separated by single operators,
//! with whitespace allowed around operators and at either end.
//!
//! ## Numbers
//!
//! - **Integer**: `0`, or a nonzero digit followed by any digits: `7`, `10`, `2048`
//! - **Decimal**: `0.` followed by one or more digits: `0.5`, `0.025`
//!
//! `05`, `00`, `1.5` and `0.1.2` are number-format errors.
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/`. An expression may not start or end with an
//! operator, and two operators may not be adjacent.
//!
//! ## Rejected outright
//!
//! Parentheses, unary minus, exponents, letters, and a number resuming
//! after whitespace (`1 2`) are expression-format errors.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analyser;
pub mod cursor;
pub mod error;
pub mod machine;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use analyser::analyse;
pub use cursor::Cursor;
pub use error::{ErrorKind, ExpressionFault, LexError, LexResult, NumberFault};
pub use token::{Operator, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_reference_expression() {
        let tokens = analyse("0.02+0-0.2346356346346*234234/0.234234").unwrap();
        assert_eq!(
            render(&tokens),
            [
                "0.02",
                "+",
                "0.0",
                "-",
                "0.2346356346346",
                "*",
                "234234.0",
                "/",
                "0.234234"
            ]
        );
    }

    #[test]
    fn test_render_extreme_numbers() {
        let tokens = analyse("0.00001 * 10000000000000000").unwrap();
        assert_eq!(render(&tokens), ["1e-05", "*", "1e+16"]);
    }

    #[test]
    fn test_analyse_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = format!("{} + 0.5 * {}", i, i + 1);
                    analyse(&source)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let tokens = handle.join().unwrap().unwrap();
            assert_eq!(tokens.len(), 5);
            assert_eq!(tokens[0], Token::number(i as f64));
            assert_eq!(tokens[4], Token::number((i + 1) as f64));
        }
    }

    #[test]
    fn test_kinds_follow_source_order() {
        let tokens = analyse("4 / 0.5 - 3 * 0").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Number,
                TokenKind::Divide,
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::Times,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_numbers_and_operators_alternate() {
        let tokens = analyse("1+2-3*4/5+0.6").unwrap();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.is_number(), i % 2 == 0, "token {} = {}", i, token);
        }
        assert_eq!(tokens.len(), 11);
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(
            analyse("1+1").unwrap(),
            vec![Token::number(1.0), Token::operator(Operator::Plus), Token::number(1.0)]
        );
        assert_eq!(analyse("00").unwrap_err().kind(), ErrorKind::NumberFormat);
        assert_eq!(analyse("+1").unwrap_err().kind(), ErrorKind::ExpressionFormat);
        assert_eq!(analyse("1++1").unwrap_err().kind(), ErrorKind::ExpressionFormat);
        assert_eq!(analyse("1.5").unwrap_err().kind(), ErrorKind::NumberFormat);
    }

    #[test]
    fn test_error_message_names_offset() {
        let err = analyse("12 + 0x").unwrap_err();
        assert_eq!(err.to_string(), "invalid expression at offset 6: unexpected character 'x'");
    }
}
