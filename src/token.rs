//! Token records
//!
//! A parse produces a flat, preorder array of [`Token`] records. Each record
//! is a borrowed view into the input plus a kind, a nesting depth, and a
//! small flag set; nothing is ever copied out of the input buffer. The depth
//! field is what turns the flat array back into a tree: a container's
//! children are exactly the following records one level deeper, up to the
//! first record at the container's own depth or above.

use crate::slice::ByteSlice;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Kind of JSON value a token describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Placeholder kind of a default-constructed token.
    Unknown = 0,
    /// `[` ... `]`
    Array,
    /// `{` ... `}`
    Object,
    /// `"` ... `"`, quotes included in the slice
    String,
    /// Any numeric literal
    Number,
    /// Reserved for a future specialization of whole numbers; the parser
    /// currently reports every numeric literal as [`TokenKind::Number`].
    Integer,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl TokenKind {
    /// True for the two container kinds.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, TokenKind::Array | TokenKind::Object)
    }
}

/// Bit set of per-token markers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// No flags set.
    pub const EMPTY: TokenFlags = TokenFlags(0);
    /// The token at index 0 of a successful parse.
    pub const IS_FIRST: TokenFlags = TokenFlags(1);
    /// The token at index `count - 1` of a successful parse.
    pub const IS_LAST: TokenFlags = TokenFlags(2);
    /// The token's slice has been finalized.
    pub const IS_SEALED: TokenFlags = TokenFlags(4);

    /// True when every flag in `other` is set in `self`.
    #[inline]
    pub const fn contains(&self, other: TokenFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no flag is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TokenFlags {
    type Output = TokenFlags;

    #[inline]
    fn bitor(self, rhs: TokenFlags) -> TokenFlags {
        TokenFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TokenFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: TokenFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for TokenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(TokenFlags::IS_FIRST) {
            names.push("IS_FIRST");
        }
        if self.contains(TokenFlags::IS_LAST) {
            names.push("IS_LAST");
        }
        if self.contains(TokenFlags::IS_SEALED) {
            names.push("IS_SEALED");
        }
        write!(f, "TokenFlags({})", names.join(" | "))
    }
}

/// One parsed JSON value: a slice of the input, its kind, its depth, and
/// its flags.
///
/// Tokens borrow the input buffer and cannot outlive it. A token is 24 bytes
/// on 64-bit targets and `Copy`, so the caller-supplied store is a plain
/// array with no drop obligations.
#[derive(Clone, Copy)]
pub struct Token<'a> {
    slice: ByteSlice<'a>,
    kind: TokenKind,
    flags: TokenFlags,
    depth: u16,
}

impl<'a> Token<'a> {
    /// A default-constructed token, for initializing token stores:
    ///
    /// ```
    /// use jsontok::Token;
    /// let mut store = [Token::EMPTY; 16];
    /// # let _ = &mut store;
    /// ```
    pub const EMPTY: Token<'static> = Token {
        slice: ByteSlice::new(&[]),
        kind: TokenKind::Unknown,
        flags: TokenFlags::EMPTY,
        depth: 0,
    };

    #[inline]
    pub(crate) fn new(kind: TokenKind, slice: ByteSlice<'a>, depth: u16, flags: TokenFlags) -> Self {
        Token {
            slice,
            kind,
            flags,
            depth,
        }
    }

    /// Finalize the slice extent and mark the token sealed.
    #[inline]
    pub(crate) fn seal(&mut self, slice: ByteSlice<'a>) {
        self.slice = slice;
        self.flags |= TokenFlags::IS_SEALED;
    }

    #[inline]
    pub(crate) fn set_flags(&mut self, flags: TokenFlags) {
        self.flags |= flags;
    }

    /// The kind of value this token describes.
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's slice of the original input.
    ///
    /// For strings the slice includes the surrounding quotes; for containers
    /// it includes the brackets or braces.
    #[inline]
    pub const fn slice(&self) -> ByteSlice<'a> {
        self.slice
    }

    /// Nesting depth; 0 for the root, parent depth + 1 for children.
    #[inline]
    pub const fn depth(&self) -> u16 {
        self.depth
    }

    /// The token's flag set.
    #[inline]
    pub const fn flags(&self) -> TokenFlags {
        self.flags
    }

    /// True for the first token of a parse.
    #[inline]
    pub const fn is_first(&self) -> bool {
        self.flags.contains(TokenFlags::IS_FIRST)
    }

    /// True for the last token of a parse.
    #[inline]
    pub const fn is_last(&self) -> bool {
        self.flags.contains(TokenFlags::IS_LAST)
    }

    /// True once the token's extent is final.
    #[inline]
    pub const fn is_sealed(&self) -> bool {
        self.flags.contains(TokenFlags::IS_SEALED)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{:?} {} '{}'>",
            self.kind,
            self.depth,
            String::from_utf8_lossy(self.slice.as_bytes()),
        )
    }
}
