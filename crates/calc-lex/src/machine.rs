//! The analyzer's state machine.
//!
//! Every character falls into a [`Class`]. Given the current [`State`] and
//! that class, [`transition`] either names the next state and the buffer
//! action to take, or rejects the character. The table is an exhaustive
//! `match`, so adding a state or class forces every pairing to be decided.
//!
//! Deciding when a buffered number is complete needs one character of
//! lookahead and is handled by the analyzer, not the table.

use crate::error::{ExpressionFault, Fault, NumberFault};
use crate::token::Operator;

/// Where the analyzer is within the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing consumed yet.
    Init,
    /// The current numeral is exactly `0`.
    LeadingZero,
    /// Inside an integer that starts with a nonzero digit.
    Digit,
    /// Inside the fractional digits of a `0.` numeral.
    DecimalDigit,
    /// Whitespace seen after a numeral; only an operator may follow.
    DigitWhitespace,
    /// An operator was just emitted.
    Operator,
}

impl State {
    /// Every state, for exhaustive checks.
    pub const ALL: [State; 6] = [
        State::Init,
        State::LeadingZero,
        State::Digit,
        State::DecimalDigit,
        State::DigitWhitespace,
        State::Operator,
    ];
}

/// Character category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// `0`
    Zero,
    /// `1` through `9`
    NonZero,
    /// `+ - * /`
    Operator(Operator),
    /// `.`
    Point,
    /// The space character `' '`
    Whitespace,
    /// Anything else
    Other(char),
}

impl Class {
    /// Classifies a character.
    ///
    /// ```
    /// use calc_lex::machine::Class;
    /// use calc_lex::Operator;
    ///
    /// assert_eq!(Class::of('0'), Class::Zero);
    /// assert_eq!(Class::of('7'), Class::NonZero);
    /// assert_eq!(Class::of('/'), Class::Operator(Operator::Divide));
    /// assert_eq!(Class::of('a'), Class::Other('a'));
    /// ```
    pub fn of(c: char) -> Self {
        if let Some(op) = Operator::from_symbol(c) {
            return Class::Operator(op);
        }
        match c {
            '0' => Class::Zero,
            '1'..='9' => Class::NonZero,
            '.' => Class::Point,
            ' ' => Class::Whitespace,
            c => Class::Other(c),
        }
    }

    /// Returns true for `0`-`9`.
    pub fn is_digit(self) -> bool {
        matches!(self, Class::Zero | Class::NonZero)
    }
}

/// What to do with the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append the digit to the integer buffer.
    PushInteger,
    /// Append the digit to the decimal buffer.
    PushDecimal,
    /// Drop the lone `0` from the integer buffer and start a `0.` decimal.
    OpenDecimal,
    /// Emit an operator token.
    Emit(Operator),
    /// Consume the character without producing anything.
    Skip,
}

/// Outcome of a successful table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after this character.
    pub next: State,
    /// Buffer or output action for this character.
    pub action: Action,
}

const fn go(next: State, action: Action) -> Result<Transition, Fault> {
    Ok(Transition { next, action })
}

const fn number(fault: NumberFault) -> Result<Transition, Fault> {
    Err(Fault::Number(fault))
}

const fn expression(fault: ExpressionFault) -> Result<Transition, Fault> {
    Err(Fault::Expression(fault))
}

/// Looks up the transition for `class` in `state`.
///
/// ```
/// use calc_lex::machine::{transition, Action, Class, State};
///
/// let t = transition(State::LeadingZero, Class::Point).unwrap();
/// assert_eq!(t.next, State::DecimalDigit);
/// assert_eq!(t.action, Action::OpenDecimal);
///
/// assert!(transition(State::LeadingZero, Class::Zero).is_err());
/// ```
pub fn transition(state: State, class: Class) -> Result<Transition, Fault> {
    use Action::*;

    match (state, class) {
        (_, Class::Other(c)) => expression(ExpressionFault::UnexpectedCharacter(c)),

        // Digits
        (State::Init | State::Operator, Class::NonZero) => go(State::Digit, PushInteger),
        (State::Init | State::Operator, Class::Zero) => go(State::LeadingZero, PushInteger),
        (State::Digit, Class::Zero | Class::NonZero) => go(State::Digit, PushInteger),
        (State::LeadingZero, Class::Zero | Class::NonZero) => number(NumberFault::LeadingZero),
        (State::DecimalDigit, Class::Zero | Class::NonZero) => {
            go(State::DecimalDigit, PushDecimal)
        },
        (State::DigitWhitespace, Class::Zero | Class::NonZero) => {
            expression(ExpressionFault::DigitAfterGap)
        },

        // Operators
        (State::Init, Class::Operator(_)) => expression(ExpressionFault::LeadingOperator),
        (State::Operator, Class::Operator(_)) => {
            expression(ExpressionFault::ConsecutiveOperators)
        },
        (
            State::Digit | State::LeadingZero | State::DecimalDigit | State::DigitWhitespace,
            Class::Operator(op),
        ) => go(State::Operator, Emit(op)),

        // Decimal point
        (State::LeadingZero, Class::Point) => go(State::DecimalDigit, OpenDecimal),
        (State::Digit, Class::Point) => number(NumberFault::PointAfterInteger),
        (State::DecimalDigit, Class::Point) => number(NumberFault::SecondPoint),
        (State::Init | State::DigitWhitespace | State::Operator, Class::Point) => {
            expression(ExpressionFault::MisplacedPoint)
        },

        // Whitespace
        (State::Init, Class::Whitespace) => expression(ExpressionFault::UnexpectedWhitespace),
        (
            State::Digit | State::LeadingZero | State::DecimalDigit | State::DigitWhitespace,
            Class::Whitespace,
        ) => go(State::DigitWhitespace, Skip),
        (State::Operator, Class::Whitespace) => go(State::Operator, Skip),
    }
}
