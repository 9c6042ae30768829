//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most callers need:
//!
//! ```
//! use jsontok::prelude::*;
//!
//! let mut tokens = [Token::EMPTY; 4];
//! let count = parse_str("[null]", &mut tokens).unwrap();
//! assert_eq!(count, 2);
//! ```

pub use crate::error::ParseError;
pub use crate::navigate::TokenCursor;
pub use crate::parser::{parse_bytes, parse_slice, parse_str};
pub use crate::slice::ByteSlice;
pub use crate::token::{Token, TokenFlags, TokenKind};
