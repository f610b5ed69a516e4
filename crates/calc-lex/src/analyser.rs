//! Expression analysis.
//!
//! [`analyse`] strips the input, then feeds it character by character
//! through the [`transition`] table, accumulating digits into an integer
//! buffer or a `0.`-prefixed decimal buffer. A buffered numeral is flushed
//! into a [`Token::Number`] as soon as the lookahead shows it cannot grow.
//!
//! All scan state lives in a `Scanner` built for a single call, so calls
//! never observe each other.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{ExpressionFault, Fault, LexResult, NumberFault};
use crate::machine::{transition, Action, Class, State};
use crate::token::{Operator, Token};

/// Prefix of every decimal numeral.
const DECIMAL_PREFIX: &str = "0.";

/// Tokenizes an arithmetic expression.
///
/// Leading and trailing whitespace is ignored; between tokens only the
/// space character is allowed. On success the tokens are
/// returned in source order; on failure nothing is returned but the error.
///
/// # Example
///
/// ```
/// use calc_lex::{analyse, Operator, Token};
///
/// let tokens = analyse(" 0.5 * 10 ").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::number(0.5), Token::operator(Operator::Times), Token::number(10.0)]
/// );
///
/// assert!(analyse("1.5").unwrap_err().is_number_format());
/// assert!(analyse("1++1").unwrap_err().is_expression_format());
/// ```
pub fn analyse(input: &str) -> LexResult<Vec<Token>> {
    let result = Scanner::new(input).run();
    match &result {
        Ok(tokens) => debug!(tokens = tokens.len(), "expression accepted"),
        Err(err) => debug!(error = %err, "expression rejected"),
    }
    result
}

/// Per-call scan state.
struct Scanner<'a> {
    /// Cursor over the stripped input.
    cursor: Cursor<'a>,

    /// Current state of the machine.
    state: State,

    /// Digits of an integer numeral not yet emitted.
    integer: String,

    /// `0.` followed by the fractional digits not yet emitted.
    decimal: String,

    /// Tokens emitted so far.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        let stripped = input.trim();
        let leading = input.trim_start();
        let base = input[..input.len() - leading.len()].chars().count();
        Self {
            cursor: Cursor::with_base(stripped, base),
            state: State::Init,
            integer: String::new(),
            decimal: String::from(DECIMAL_PREFIX),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> LexResult<Vec<Token>> {
        let first = match self.cursor.current_char() {
            Some(c) => c,
            None => return Err(Fault::from(ExpressionFault::Empty).at(self.cursor.offset())),
        };
        if Operator::from_symbol(first).is_some() {
            return Err(Fault::from(ExpressionFault::LeadingOperator).at(self.cursor.offset()));
        }

        while let Some(c) = self.cursor.current_char() {
            self.step(c).map_err(|fault| fault.at(self.cursor.offset()))?;
            self.cursor.advance();
        }

        if !self.integer.is_empty() || self.decimal.len() > DECIMAL_PREFIX.len() {
            return Err(Fault::from(NumberFault::Unterminated).at(self.cursor.offset()));
        }
        Ok(self.tokens)
    }

    /// Consumes one character.
    fn step(&mut self, c: char) -> Result<(), Fault> {
        let class = Class::of(c);
        if matches!(class, Class::Operator(_)) && self.cursor.is_last() {
            return Err(ExpressionFault::TrailingOperator.into());
        }

        let t = transition(self.state, class)?;
        trace!(state = ?self.state, next = ?t.next, ch = %c, "transition");
        self.state = t.next;

        match t.action {
            Action::PushInteger => {
                self.integer.push(c);
                if self.numeral_ends() {
                    let value = parse_numeral(&self.integer)?;
                    self.integer.clear();
                    self.emit(Token::number(value));
                }
            },
            Action::PushDecimal => {
                self.decimal.push(c);
                if self.numeral_ends() {
                    let value = parse_numeral(&self.decimal)?;
                    self.decimal.truncate(DECIMAL_PREFIX.len());
                    self.emit(Token::number(value));
                }
            },
            Action::OpenDecimal => {
                if !self.cursor.peek_char().is_some_and(|n| Class::of(n).is_digit()) {
                    return Err(NumberFault::MissingFraction.into());
                }
                self.integer.clear();
            },
            Action::Emit(op) => self.emit(Token::operator(op)),
            Action::Skip => {},
        }
        Ok(())
    }

    /// True when the lookahead can neither extend the numeral nor start
    /// its fraction. End of input counts as such a lookahead.
    fn numeral_ends(&self) -> bool {
        match self.cursor.peek_char().map(Class::of) {
            Some(class) => !class.is_digit() && class != Class::Point,
            None => true,
        }
    }

    fn emit(&mut self, token: Token) {
        trace!(%token, "emit");
        self.tokens.push(token);
    }
}

/// Converts buffered digits to a finite `f64`.
fn parse_numeral(text: &str) -> Result<f64, Fault> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumberFault::OutOfRange.into()),
    }
}
