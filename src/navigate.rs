//! Flat-tree navigation
//!
//! A successful parse leaves a preorder token array whose `depth` fields
//! encode the tree shape, so navigation never needs parent or child links:
//! every query is a linear scan that compares depths and stops at the
//! bookend flags. [`TokenCursor`] packages a token array and an index so the
//! queries chain through `Option`; an absent result stays absent through any
//! further navigation.
//!
//! ```
//! use jsontok::{parse_str, Token, TokenCursor};
//!
//! let json = r#"{"a": [1, 2], "b": true}"#;
//! let mut tokens = [Token::EMPTY; 8];
//! let count = parse_str(json, &mut tokens).unwrap();
//!
//! let root = TokenCursor::new(&tokens[..count], 0).unwrap();
//! let array = root.find_value("a").unwrap();
//! assert_eq!(array.token().slice(), "[1, 2]");
//! assert_eq!(array.child().unwrap().token().slice(), "1");
//! ```

use crate::token::{Token, TokenKind};

/// A position within a parsed token array.
///
/// Cursors are cheap to copy and every movement returns a fresh cursor, so
/// walks can branch freely without bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'s, 'a> {
    tokens: &'s [Token<'a>],
    index: usize,
}

impl<'s, 'a> TokenCursor<'s, 'a> {
    /// Cursor at `index` within `tokens`, or `None` when out of range.
    #[inline]
    pub fn new(tokens: &'s [Token<'a>], index: usize) -> Option<Self> {
        if index < tokens.len() {
            Some(TokenCursor { tokens, index })
        } else {
            None
        }
    }

    /// The token under the cursor.
    #[inline]
    pub fn token(&self) -> &'s Token<'a> {
        &self.tokens[self.index]
    }

    /// Index of the token under the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    fn at(&self, index: usize) -> Option<Self> {
        Self::new(self.tokens, index)
    }

    #[inline]
    fn depth(&self) -> u16 {
        self.token().depth()
    }

    /// The preceding token, unless this is the first.
    #[inline]
    pub fn prev(self) -> Option<Self> {
        if self.token().is_first() {
            return None;
        }
        self.index.checked_sub(1).and_then(|i| self.at(i))
    }

    /// The following token, unless this is the last.
    #[inline]
    pub fn next(self) -> Option<Self> {
        if self.token().is_last() {
            return None;
        }
        self.at(self.index + 1)
    }

    /// The root of the parse: walk backward to the first token.
    pub fn root(self) -> Option<Self> {
        let mut cursor = self;
        while !cursor.token().is_first() {
            cursor = cursor.prev()?;
        }
        Some(cursor)
    }

    /// The enclosing container: the nearest preceding token at a strictly
    /// smaller depth.
    pub fn parent(self) -> Option<Self> {
        let depth = self.depth();
        let mut cursor = self;
        loop {
            cursor = cursor.prev()?;
            if cursor.depth() < depth {
                return Some(cursor);
            }
        }
    }

    /// The first child: the next token, when it sits exactly one level
    /// deeper.
    pub fn child(self) -> Option<Self> {
        let next = self.next()?;
        if next.depth() == self.depth() + 1 {
            Some(next)
        } else {
            None
        }
    }

    /// The previous sibling: scan backward past deeper tokens, stopping at
    /// the first token of equal depth, or absent upon leaving the container.
    pub fn prev_sibling(self) -> Option<Self> {
        let depth = self.depth();
        let mut cursor = self;
        loop {
            cursor = cursor.prev()?;
            if cursor.depth() < depth {
                return None;
            }
            if cursor.depth() == depth {
                return Some(cursor);
            }
        }
    }

    /// The next sibling: scan forward past deeper tokens, stopping at the
    /// first token of equal depth, or absent upon leaving the container.
    pub fn next_sibling(self) -> Option<Self> {
        let depth = self.depth();
        let mut cursor = self;
        loop {
            cursor = cursor.next()?;
            if cursor.depth() < depth {
                return None;
            }
            if cursor.depth() == depth {
                return Some(cursor);
            }
        }
    }

    /// Among the members of this object, the key token whose text equals
    /// `key` (compared without the quotes). Absent when the cursor is not
    /// on an object or no key matches.
    pub fn find_key(self, key: &str) -> Option<Self> {
        if self.token().kind() != TokenKind::Object {
            return None;
        }
        let mut member = self.child();
        while let Some(candidate) = member {
            let slice = candidate.token().slice();
            if candidate.token().kind() == TokenKind::String
                && slice.slice(1, -1) == key.as_bytes()
            {
                return Some(candidate);
            }
            // Skip over the key's value to the next key.
            member = candidate.next_sibling().and_then(|v| v.next_sibling());
        }
        None
    }

    /// The value belonging to `key` in this object. See
    /// [`TokenCursor::find_key`].
    #[inline]
    pub fn find_value(self, key: &str) -> Option<Self> {
        self.find_key(key)?.next_sibling()
    }
}
