//! Error types for expression analysis.
//!
//! Every failure is one of two kinds: the digits of a single numeral are
//! malformed ([`LexError::NumberFormat`]), or the arrangement of numbers,
//! operators and whitespace is malformed ([`LexError::ExpressionFormat`]).

use thiserror::Error;

/// Why a numeral was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberFault {
    /// A digit directly after a lone leading zero, as in `05` or `00`.
    #[error("a leading zero may not be followed by another digit")]
    LeadingZero,

    /// A decimal point after an integer that does not start with zero.
    #[error("a decimal point may only follow a lone leading zero")]
    PointAfterInteger,

    /// A second decimal point in the same numeral.
    #[error("a number may contain only one decimal point")]
    SecondPoint,

    /// A decimal point with no digit after it.
    #[error("a decimal point must be followed by a digit")]
    MissingFraction,

    /// The digits do not fit in a finite `f64`.
    #[error("number is too large to represent")]
    OutOfRange,

    /// Digits were still buffered when the input ended.
    #[error("number was not terminated")]
    Unterminated,
}

/// Why the arrangement of tokens was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpressionFault {
    /// Nothing but whitespace.
    #[error("expression is empty")]
    Empty,

    /// First character is an operator.
    #[error("expression may not start with an operator")]
    LeadingOperator,

    /// Last character is an operator.
    #[error("expression may not end with an operator")]
    TrailingOperator,

    /// Two operators with no number between them.
    #[error("two operators may not follow each other")]
    ConsecutiveOperators,

    /// A digit after whitespace that followed a number.
    #[error("a number may not resume after whitespace")]
    DigitAfterGap,

    /// A decimal point with no leading zero before it.
    #[error("a decimal point must follow a leading zero")]
    MisplacedPoint,

    /// Whitespace where no whitespace can appear.
    #[error("unexpected whitespace")]
    UnexpectedWhitespace,

    /// Not a digit, operator, decimal point or whitespace.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

/// Classification of a [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeral violates the digit rules.
    NumberFormat,
    /// The expression violates the token grammar.
    ExpressionFormat,
}

/// Error returned by [`analyse`](crate::analyse).
///
/// `offset` is the character offset of the offending character in the
/// input as given, before whitespace stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A numeral violates the digit rules.
    #[error("invalid number at offset {offset}: {fault}")]
    NumberFormat {
        /// Character offset of the offending character.
        offset: usize,
        /// What was wrong with the numeral.
        fault: NumberFault,
    },

    /// The expression violates the token grammar.
    #[error("invalid expression at offset {offset}: {fault}")]
    ExpressionFormat {
        /// Character offset of the offending character.
        offset: usize,
        /// What was wrong with the expression.
        fault: ExpressionFault,
    },
}

impl LexError {
    /// Returns the error classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::NumberFormat { .. } => ErrorKind::NumberFormat,
            LexError::ExpressionFormat { .. } => ErrorKind::ExpressionFormat,
        }
    }

    /// Character offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            LexError::NumberFormat { offset, .. } | LexError::ExpressionFormat { offset, .. } => {
                *offset
            },
        }
    }

    /// Returns true for [`LexError::NumberFormat`].
    pub fn is_number_format(&self) -> bool {
        self.kind() == ErrorKind::NumberFormat
    }

    /// Returns true for [`LexError::ExpressionFormat`].
    pub fn is_expression_format(&self) -> bool {
        self.kind() == ErrorKind::ExpressionFormat
    }
}

/// A rejection not yet tied to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// See [`NumberFault`].
    Number(NumberFault),
    /// See [`ExpressionFault`].
    Expression(ExpressionFault),
}

impl Fault {
    /// Attaches a character offset, producing the public error.
    pub fn at(self, offset: usize) -> LexError {
        match self {
            Fault::Number(fault) => LexError::NumberFormat { offset, fault },
            Fault::Expression(fault) => LexError::ExpressionFormat { offset, fault },
        }
    }
}

impl From<NumberFault> for Fault {
    fn from(fault: NumberFault) -> Self {
        Fault::Number(fault)
    }
}

impl From<ExpressionFault> for Fault {
    fn from(fault: ExpressionFault) -> Self {
        Fault::Expression(fault)
    }
}

/// Result type alias for analysis.
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_error_display() {
        let err = Fault::from(NumberFault::LeadingZero).at(1);
        assert_eq!(
            err.to_string(),
            "invalid number at offset 1: a leading zero may not be followed by another digit"
        );
    }

    #[test]
    fn test_expression_error_display() {
        let err = Fault::from(ExpressionFault::UnexpectedCharacter('x')).at(4);
        assert_eq!(err.to_string(), "invalid expression at offset 4: unexpected character 'x'");
    }

    #[test]
    fn test_kind_and_offset() {
        let err = Fault::from(ExpressionFault::Empty).at(0);
        assert_eq!(err.kind(), ErrorKind::ExpressionFormat);
        assert!(err.is_expression_format());
        assert!(!err.is_number_format());
        assert_eq!(err.offset(), 0);

        let err = Fault::from(NumberFault::SecondPoint).at(7);
        assert_eq!(err.kind(), ErrorKind::NumberFormat);
        assert_eq!(err.offset(), 7);
    }
}
