//! jsontok - Allocation-Free JSON Token Scanner
//!
//! A compact JSON parser for memory-constrained environments. It validates
//! the input in a single table-driven pass and emits a flat, preorder array
//! of tokens that borrow slices of the original text: no value bytes are
//! copied, no numbers are converted, no string escapes are decoded, and the
//! parser itself allocates nothing. After parsing, the token array navigates
//! as a tree through depth comparisons alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsontok::{parse_str, Token, TokenCursor, TokenKind};
//!
//! let json = r#"{"name": "probe-7", "readings": [3, -5, 11]}"#;
//!
//! // The caller owns the token store; the parser only fills it in.
//! let mut tokens = [Token::EMPTY; 16];
//! let count = parse_str(json, &mut tokens).unwrap();
//! assert_eq!(count, 8);
//!
//! // Tokens are slices of the input, in preorder, with depths.
//! assert_eq!(tokens[0].kind(), TokenKind::Object);
//! assert_eq!(tokens[2].slice(), r#""probe-7""#);
//!
//! // Navigate the flat array as a tree.
//! let root = TokenCursor::new(&tokens[..count], 0).unwrap();
//! let readings = root.find_value("readings").unwrap();
//! let first = readings.child().unwrap();
//! assert_eq!(first.token().slice(), "3");
//! assert_eq!(first.next_sibling().unwrap().token().slice(), "-5");
//! ```
//!
//! ## Design
//!
//! - **Caller-owned memory.** Input buffer and token store both belong to
//!   the caller; a fixed-size store bounds the work a parse can do, and a
//!   full store fails the parse with [`ParseError::NoTokens`].
//! - **Flat preorder tree.** Each token records its nesting depth; parents,
//!   children, and siblings are recovered by linear scans, so no link
//!   fields or auxiliary indexes exist.
//! - **Table-driven validation.** A 31-state, 31-class transition grid
//!   validates RFC 7159 JSON byte by byte. String bytes at 0x80 and above
//!   pass through untouched, so UTF-8 content survives verbatim without
//!   being inspected.
//! - **Everything borrowed.** Token slices point into the input; the type
//!   system keeps tokens from outliving it.
//!
//! ## Feature Flags
//!
//! - `logging` - trace parser state transitions via the `log` crate

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]

mod classify;
mod state;

pub mod error;
pub mod navigate;
pub mod parser;
pub mod prelude;
pub mod slice;
pub mod token;

pub use error::ParseError;
pub use navigate::TokenCursor;
pub use parser::{parse_bytes, parse_slice, parse_str};
pub use slice::ByteSlice;
pub use token::{Token, TokenFlags, TokenKind};
