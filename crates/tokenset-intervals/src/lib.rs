//! # tokenset-intervals
//!
//! Compact sets of integer token identifiers, stored as a sorted sequence of
//! disjoint, non-adjacent ranges rather than one record per element.
//!
//! A grammar engine uses these sets to answer questions such as "which tokens
//! may follow this position?" or "which code points does `~[a-z]` match?".
//! A set like "every Unicode code point except control characters" costs a
//! couple of [`Interval`] records instead of a million entries.
//!
//! ## Bound Conventions
//!
//! An [`Interval`] is a `(start, stop)` pair, and different operations read
//! the pair differently:
//!
//! | Operation                         | Reading of `stop`                     |
//! |-----------------------------------|---------------------------------------|
//! | [`Interval::contains`]            | exclusive: `start <= x < stop`        |
//! | [`Interval::length`]              | inclusive: `max(stop - start + 1, 0)` |
//! | set rendering, singleton check    | `stop == start + 1`                   |
//! | `Display` for a lone [`Interval`] | singleton when `start == stop`        |
//!
//! Callers of the grammar engine depend on these exact results, so they are
//! kept as-is. Insertion adjacency and removal both follow the exclusive
//! reading used by `contains`.
//!
//! ## Module Structure
//!
//! ```text
//! tokenset-intervals/
//! ├── lib.rs            # This file - public API
//! ├── token.rs          # Reserved sentinels and TokenType
//! ├── interval.rs       # The Interval range primitive
//! ├── interval_set/
//! │   ├── mod.rs        # IntervalSet, queries, read-only handling
//! │   ├── insert.rs     # add_* and the reduce pass
//! │   ├── remove.rs     # remove_one / remove_range
//! │   └── algebra.rs    # complement, subtract, intersection, union
//! ├── render.rs         # RenderMode and the three renderers
//! ├── vocabulary.rs     # Literal/symbolic/display name tables
//! └── error.rs          # IntervalSetError
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tokenset_intervals::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.add_range(1, 3)?;
//! set.add_range(5, 7)?;
//! set.add_one(10)?;
//!
//! assert!(set.contains(6));
//! assert!(!set.contains(7));
//! assert_eq!(set.to_string(), "{1..3, 5..7, 10}");
//! # Ok::<(), tokenset_intervals::IntervalSetError>(())
//! ```

pub mod error;
pub mod interval;
pub mod interval_set;
pub mod render;
pub mod token;
pub mod vocabulary;

pub use error::IntervalSetError;
pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use render::{RenderMode, element_name};
pub use token::{TOKEN_EOF, TOKEN_EPSILON, TOKEN_INVALID_TYPE, TokenType};
pub use vocabulary::Vocabulary;
