//! Token definitions.
//!
//! A token is either a numeric literal or one of the four arithmetic
//! operators. Tokens are produced by [`analyse`](crate::analyse) and are
//! immutable once built.

use std::fmt;

/// One of the four binary arithmetic operators.
///
/// # Example
///
/// ```
/// use calc_lex::Operator;
///
/// assert_eq!(Operator::from_symbol('*'), Some(Operator::Times));
/// assert_eq!(Operator::from_symbol('x'), None);
/// assert_eq!(Operator::Divide.symbol(), '/');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
}

impl Operator {
    /// Every operator, in symbol order `+ - * /`.
    pub const ALL: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
    ];

    /// Maps an operator symbol to its kind.
    ///
    /// Returns `None` for any character that is not `+`, `-`, `*` or `/`,
    /// which lets callers test a character's category without failing.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Times),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Returns the source symbol of this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
}

impl From<Operator> for TokenKind {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Plus => TokenKind::Plus,
            Operator::Minus => TokenKind::Minus,
            Operator::Times => TokenKind::Times,
            Operator::Divide => TokenKind::Divide,
        }
    }
}

/// A lexical token of an arithmetic expression.
///
/// Equality is by value: two numbers are equal when their values are equal,
/// two operators when they are the same operator. A number never equals an
/// operator.
///
/// # Example
///
/// ```
/// use calc_lex::{Operator, Token, TokenKind};
///
/// let n = Token::number(0.5);
/// assert!(n.is_number());
/// assert_eq!(n.value(), Some(0.5));
/// assert_eq!(n.to_string(), "0.5");
///
/// let plus = Token::operator(Operator::Plus);
/// assert_eq!(plus.kind(), TokenKind::Plus);
/// assert_eq!(plus.value(), None);
/// assert_eq!(plus.to_string(), "+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal. The analyzer only ever builds finite values.
    Number(f64),
    /// Arithmetic operator
    Operator(Operator),
}

impl Token {
    /// Creates a number token.
    pub fn number(value: f64) -> Self {
        Token::Number(value)
    }

    /// Creates an operator token.
    pub fn operator(op: Operator) -> Self {
        Token::Operator(op)
    }

    /// Returns true for number tokens.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(op) => TokenKind::from(*op),
        }
    }

    /// Returns the numeric value, or `None` for operators.
    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Operator(_) => None,
        }
    }

    /// Returns the operator, or `None` for numbers.
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Number(_) => None,
            Token::Operator(op) => Some(*op),
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    /// Numbers render with the shortest round-trip digits and always show a
    /// fractional part (`1.0`, `0.02`). Outside `1e-4..1e16` they switch to
    /// scientific notation with a signed exponent of at least two digits
    /// (`1e-05`, `1e+16`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write_number(f, *value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        },
        None => f.write_str(&shortest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_operators() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Plus));
        assert_eq!(Operator::from_symbol('-'), Some(Operator::Minus));
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Times));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
    }

    #[test]
    fn test_from_symbol_rejects_other_chars() {
        for c in ['0', '9', '.', ' ', 'x', '%', '^', '(', '\0'] {
            assert_eq!(Operator::from_symbol(c), None, "char {:?}", c);
        }
    }

    #[test]
    fn test_symbol_inverts_from_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(Token::number(3.0).kind(), TokenKind::Number);
        assert_eq!(Token::operator(Operator::Plus).kind(), TokenKind::Plus);
        assert_eq!(Token::operator(Operator::Minus).kind(), TokenKind::Minus);
        assert_eq!(Token::operator(Operator::Times).kind(), TokenKind::Times);
        assert_eq!(Token::operator(Operator::Divide).kind(), TokenKind::Divide);
    }

    #[test]
    fn test_value_only_for_numbers() {
        assert_eq!(Token::number(0.25).value(), Some(0.25));
        for op in Operator::ALL {
            assert_eq!(Token::operator(op).value(), None);
            assert!(!Token::operator(op).is_number());
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(Token::number(1.0), Token::number(1.0));
        assert_ne!(Token::number(1.0), Token::number(2.0));
        assert_eq!(Token::operator(Operator::Times), Token::operator(Operator::Times));
        assert_ne!(Token::operator(Operator::Times), Token::operator(Operator::Divide));
        assert_ne!(Token::number(0.0), Token::operator(Operator::Plus));
    }

    #[test]
    fn test_render() {
        assert_eq!(Token::number(1.0).to_string(), "1.0");
        assert_eq!(Token::number(0.02).to_string(), "0.02");
        assert_eq!(Token::number(234234.0).to_string(), "234234.0");
        assert_eq!(Token::number(0.2346356346346).to_string(), "0.2346356346346");
        assert_eq!(Token::operator(Operator::Plus).to_string(), "+");
        assert_eq!(Token::operator(Operator::Minus).to_string(), "-");
        assert_eq!(Token::operator(Operator::Times).to_string(), "*");
        assert_eq!(Token::operator(Operator::Divide).to_string(), "/");
    }

    #[test]
    fn test_render_scientific() {
        assert_eq!(Token::number(0.0001).to_string(), "0.0001");
        assert_eq!(Token::number(0.00001).to_string(), "1e-05");
        assert_eq!(Token::number(0.000025).to_string(), "2.5e-05");
        assert_eq!(Token::number(9999999999999998.0).to_string(), "9999999999999998.0");
        assert_eq!(Token::number(1e16).to_string(), "1e+16");
        assert_eq!(Token::number(1.5e20).to_string(), "1.5e+20");
        assert_eq!(Token::number(1e300).to_string(), "1e+300");
    }

    #[test]
    fn test_as_operator() {
        assert_eq!(Token::from(Operator::Minus).as_operator(), Some(Operator::Minus));
        assert_eq!(Token::number(7.0).as_operator(), None);
    }
}
