//! Parser driver
//!
//! The driver walks the input one byte at a time: classify the byte, look up
//! the `(state, class)` cell, and either hop to the next pure state or
//! perform the cell's action (allocate a token, seal one or more tokens,
//! pick the next state from context). One synthetic trailing space is
//! processed after the last byte so scalars at end of input close through
//! the same path as scalars followed by real whitespace.
//!
//! Tokens are written into a caller-supplied store in preorder; the driver
//! allocates nothing and keeps no state beyond the [`Parser`] struct on the
//! stack.
//!
//! # Sealing
//!
//! A freshly allocated token's slice provisionally runs from its first byte
//! to the end of the input. Sealing re-slices it to its real extent: the
//! token's start is recovered from the provisional slice length, and the end
//! is the current position (plus one when the closing delimiter belongs to
//! the value, as for strings and containers). Exclusive seals drop any
//! trailing whitespace caught between the value and the delimiter that
//! triggered the seal.

use crate::classify::{classify, CharClass};
use crate::error::ParseError;
use crate::slice::{is_whitespace, ByteSlice};
use crate::state::{lookup, Action, Cell, State};
use crate::token::{Token, TokenFlags, TokenKind};

// No-op unless the `logging` feature is enabled.
#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

/// Parse JSON text into the caller-supplied token store.
///
/// On success, returns the number of tokens written (always at least 1);
/// `tokens[..count]` then holds the preorder token sequence. On failure the
/// contents of the store are unspecified.
///
/// ```
/// use jsontok::{parse_str, Token, TokenKind};
///
/// let mut tokens = [Token::EMPTY; 4];
/// let count = parse_str("[1, 2]", &mut tokens).unwrap();
/// assert_eq!(count, 3);
/// assert_eq!(tokens[0].kind(), TokenKind::Array);
/// assert_eq!(tokens[1].slice(), "1");
/// ```
pub fn parse_str<'a>(json: &'a str, tokens: &mut [Token<'a>]) -> Result<usize, ParseError> {
    parse_slice(ByteSlice::from(json), tokens)
}

/// Parse a raw byte buffer. See [`parse_str`].
pub fn parse_bytes<'a>(json: &'a [u8], tokens: &mut [Token<'a>]) -> Result<usize, ParseError> {
    parse_slice(ByteSlice::from(json), tokens)
}

/// Parse a [`ByteSlice`] view. See [`parse_str`].
pub fn parse_slice<'a>(json: ByteSlice<'a>, tokens: &mut [Token<'a>]) -> Result<usize, ParseError> {
    Parser::new(json, tokens).run()
}

/// Mutable parse state: input cursor, token count, nesting depth, and the
/// current machine state.
struct Parser<'a, 's> {
    input: ByteSlice<'a>,
    tokens: &'s mut [Token<'a>],
    count: usize,
    depth: u16,
    char_pos: usize,
    state: State,
}

impl<'a, 's> Parser<'a, 's> {
    fn new(input: ByteSlice<'a>, tokens: &'s mut [Token<'a>]) -> Self {
        Parser {
            input,
            tokens,
            count: 0,
            depth: 0,
            char_pos: 0,
            state: State::Go,
        }
    }

    fn run(mut self) -> Result<usize, ParseError> {
        log_trace!("parsing {:?}", self.input);

        let mut eos = false;
        while !eos {
            let class = match self.input.get(self.char_pos) {
                Some(byte) => classify(byte).ok_or(ParseError::BadFormat)?,
                None => {
                    // End of input acts as one trailing space, so dangling
                    // scalars close through the ordinary whitespace path.
                    eos = true;
                    CharClass::Space
                }
            };

            match lookup(self.state, class) {
                Cell::Goto(next) => self.state = next,
                Cell::Act(action) => self.dispatch(action)?,
                Cell::Error => return Err(ParseError::BadFormat),
            }

            self.char_pos += 1;
        }

        log_trace!(
            "endgame: count={} depth={} state={:?}",
            self.count,
            self.depth,
            self.state
        );

        if self.depth != 0 {
            return Err(ParseError::Incomplete);
        }
        if self.state != State::Ok {
            return Err(ParseError::BadFormat);
        }
        let last = self.count.checked_sub(1).ok_or(ParseError::BadFormat)?;
        self.tokens[last].set_flags(TokenFlags::IS_LAST);
        // A scalar root may still be open; its extent is everything up to
        // (and trimmed back from) the end of input.
        self.finish_token(0, false);
        Ok(self.count)
    }

    fn dispatch(&mut self, action: Action) -> Result<(), ParseError> {
        match action {
            Action::BeginObject => {
                self.begin_token(TokenKind::Object, State::Ob)?;
                self.depth += 1;
            }
            Action::BeginArray => {
                self.begin_token(TokenKind::Array, State::Ar)?;
                self.depth += 1;
            }
            Action::BeginString => self.begin_token(TokenKind::String, State::St)?,
            Action::BeginTrue => self.begin_token(TokenKind::True, State::T1)?,
            Action::BeginFalse => self.begin_token(TokenKind::False, State::F1)?,
            Action::BeginNull => self.begin_token(TokenKind::Null, State::N1)?,
            Action::BeginMinus => self.begin_token(TokenKind::Number, State::Mi)?,
            Action::BeginZero => self.begin_token(TokenKind::Number, State::Ze)?,
            Action::BeginDigit => self.begin_token(TokenKind::Number, State::In)?,
            Action::FinishObject => self.finish_container(TokenKind::Object)?,
            Action::FinishArray => self.finish_container(TokenKind::Array)?,
            Action::Colon => {
                let tos = self.tos().ok_or(ParseError::BadFormat)?;
                self.finish_token(tos, false);
                // A colon is only valid directly after an object key.
                self.state = self.select_state(tos, None, None, None, Some(State::Va))?;
            }
            Action::Comma => {
                let tos = self.tos().ok_or(ParseError::BadFormat)?;
                self.finish_token(tos, false);
                self.state =
                    self.select_state(tos, None, Some(State::Va), Some(State::Ke), None)?;
            }
            Action::TrailingSpace => {
                let tos = self.tos().ok_or(ParseError::BadFormat)?;
                if !self.tokens[tos].kind().is_container() {
                    self.finish_token(tos, false);
                }
                let state = self.state;
                self.state = self.select_state(
                    tos,
                    Some(State::Ok),
                    Some(State::Ok),
                    Some(State::Ok),
                    Some(state),
                )?;
            }
            Action::CloseQuote => {
                let tos = self.tos().ok_or(ParseError::BadFormat)?;
                self.finish_token(tos, true);
                self.state = self.select_state(
                    tos,
                    Some(State::Ok),
                    Some(State::Ok),
                    Some(State::Ok),
                    Some(State::Co),
                )?;
            }
        }
        Ok(())
    }

    /// Most recently allocated token, if any.
    #[inline]
    fn tos(&self) -> Option<usize> {
        self.count.checked_sub(1)
    }

    /// Allocate the next token record and enter `next`.
    ///
    /// The provisional slice runs from the current position to the end of
    /// the input; sealing narrows it later.
    fn begin_token(&mut self, kind: TokenKind, next: State) -> Result<(), ParseError> {
        if self.count >= self.tokens.len() {
            return Err(ParseError::NoTokens);
        }
        let slice = self.input.slice(self.char_pos as isize, ByteSlice::END);
        let mut flags = TokenFlags::EMPTY;
        if self.count == 0 {
            flags |= TokenFlags::IS_FIRST;
        }
        self.tokens[self.count] = Token::new(kind, slice, self.depth, flags);
        self.count += 1;
        self.state = next;
        log_trace!("begin {:?}", self.tokens[self.count - 1]);
        Ok(())
    }

    /// Seal a token at the current position.
    ///
    /// `include_delimiter` extends the extent over the byte being processed
    /// (the closing quote, bracket, or brace). Sealing an already-sealed
    /// token does nothing.
    fn finish_token(&mut self, index: usize, include_delimiter: bool) {
        if self.tokens[index].is_sealed() {
            return;
        }
        // The provisional slice runs to the end of input, so its length
        // encodes where the token started.
        let start = self.input.len() - self.tokens[index].slice().len();
        let end = if include_delimiter {
            self.char_pos + 1
        } else {
            self.char_pos
        };
        let mut slice = self.input.slice(start as isize, end as isize);
        if !include_delimiter {
            slice = slice.rtrim(is_whitespace);
        }
        self.tokens[index].seal(slice);
        log_trace!("seal {:?}", self.tokens[index]);
    }

    /// Handle `]` or `}`: seal the value on top of the stack if it is still
    /// open, then seal the innermost open container through the closing
    /// delimiter and pop one nesting level.
    fn finish_container(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        let tos = self.tos().ok_or(ParseError::BadFormat)?;
        if self.depth == 0 {
            // Close with nothing open.
            return Err(ParseError::BadFormat);
        }
        if self.tokens[tos].kind() != kind {
            // Top of stack is the container's last child; seal it, then the
            // container itself.
            self.finish_token(tos, false);
            let container = self.innermost_open().ok_or(ParseError::BadFormat)?;
            self.finish_token(container, true);
        } else if self.tokens[tos].is_sealed() {
            // Top of stack is a closed child container.
            let container = self.innermost_open().ok_or(ParseError::BadFormat)?;
            self.finish_token(container, true);
        } else {
            // Top of stack is the container itself, still open: it is empty.
            self.finish_token(tos, true);
        }
        self.depth -= 1;
        self.state = State::Ok;
        Ok(())
    }

    /// Index of the innermost container still being filled: the latest
    /// record below the current nesting depth.
    fn innermost_open(&self) -> Option<usize> {
        let depth = self.depth;
        self.tokens[..self.count]
            .iter()
            .rposition(|t| t.depth() < depth)
    }

    /// Index of the record enclosing `index`: the latest earlier record at
    /// strictly smaller depth.
    fn parent_of(&self, index: usize) -> Option<usize> {
        let depth = self.tokens[index].depth();
        self.tokens[..index].iter().rposition(|t| t.depth() < depth)
    }

    /// Number of direct children of `container` up to and including `token`.
    ///
    /// `token` must be a direct child of `container` (or the container
    /// itself, which counts as zero children).
    fn child_count(&self, container: usize, token: usize) -> usize {
        if container == token {
            return 0;
        }
        let child_depth = self.tokens[container].depth() + 1;
        self.tokens[container + 1..=token]
            .iter()
            .filter(|t| t.depth() == child_depth)
            .count()
    }

    /// Pick the next state from the context of `token`.
    ///
    /// `expect_key` applies when `token` completes an object member (an even
    /// number of children so far means a key comes next); `expect_value`
    /// applies when `token` is itself a key awaiting its value. `None`
    /// rejects the input.
    fn select_state(
        &self,
        token: usize,
        outside: Option<State>,
        in_array: Option<State>,
        expect_key: Option<State>,
        expect_value: Option<State>,
    ) -> Result<State, ParseError> {
        let selected = match self.parent_of(token) {
            None => outside,
            Some(container) if self.tokens[container].kind() == TokenKind::Array => in_array,
            Some(container) => {
                if self.child_count(container, token) % 2 == 0 {
                    expect_key
                } else {
                    expect_value
                }
            }
        };
        selected.ok_or(ParseError::BadFormat)
    }
}
