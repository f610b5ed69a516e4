//! Character cursor for traversing an expression.
//!
//! The cursor walks a string one `char` at a time, handling UTF-8 correctly,
//! and reports positions as character offsets so that errors point at the
//! same column a user would count.

/// A cursor over the characters of an expression.
///
/// # Example
///
/// ```
/// use calc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1+2");
/// assert_eq!(cursor.current_char(), Some('1'));
/// assert_eq!(cursor.peek_char(), Some('+'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('+'));
/// ```
pub struct Cursor<'a> {
    /// The text being traversed.
    source: &'a str,

    /// Current byte position in `source`.
    position: usize,

    /// Number of characters consumed so far, plus `base`.
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::with_base(source, 0)
    }

    /// Creates a cursor whose reported offsets start at `base`.
    ///
    /// Used when `source` is a slice of a larger input, so that offsets
    /// still refer to the larger input.
    pub fn with_base(source: &'a str, base: usize) -> Self {
        Self {
            source,
            position: 0,
            offset: base,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Returns the character after the current one, or `None` if there is none.
    ///
    /// ```
    /// use calc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("7");
    /// assert_eq!(cursor.current_char(), Some('7'));
    /// assert_eq!(cursor.peek_char(), None);
    /// ```
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Moves past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
            self.offset += 1;
        }
    }

    /// Returns true if the current character is the last one.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.current_char().is_some() && self.peek_char().is_none()
    }

    /// Character offset of the current character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
