//! Reserved token identifiers shared with the grammar engine.
//!
//! The engine owns these values; sets only need to recognise them when
//! rendering.

use std::fmt;

/// The "no token" identifier, returned by [`IntervalSet::first`](crate::IntervalSet::first)
/// on an empty set.
pub const TOKEN_INVALID_TYPE: isize = 0;

/// End of input.
pub const TOKEN_EOF: isize = -1;

/// Epsilon transition label.
pub const TOKEN_EPSILON: isize = -2;

/// A token identifier classified against the reserved sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    InvalidType,
    Epsilon,
    Eof,
    /// A grammar-defined token type (any identifier that is not a sentinel).
    User(isize),
}

impl TokenType {
    /// Classifies a raw identifier.
    pub fn from_raw(raw: isize) -> Self {
        match raw {
            TOKEN_EPSILON => Self::Epsilon,
            TOKEN_EOF => Self::Eof,
            TOKEN_INVALID_TYPE => Self::InvalidType,
            other => Self::User(other),
        }
    }

    /// Returns the raw identifier.
    pub fn raw(self) -> isize {
        match self {
            Self::InvalidType => TOKEN_INVALID_TYPE,
            Self::Epsilon => TOKEN_EPSILON,
            Self::Eof => TOKEN_EOF,
            Self::User(raw) => raw,
        }
    }
}

impl From<isize> for TokenType {
    fn from(raw: isize) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType => f.write_str("INVALID_TYPE"),
            Self::Epsilon => f.write_str("EPSILON"),
            Self::Eof => f.write_str("EOF"),
            Self::User(raw) => write!(f, "{raw}"),
        }
    }
}
