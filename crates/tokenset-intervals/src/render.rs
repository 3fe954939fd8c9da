//! # Rendering
//!
//! Sets render in one of three modes, chosen explicitly through
//! [`RenderMode`]:
//!
//! ```text
//! Index  {1..3, 5..7, 10}        bare numbers, ranges as lo..hi
//! Char   {'a'..'f', 'z'}         bounds as quoted characters
//! Named  {'+', ID, <EOF>}        every element expanded through a vocabulary
//! ```
//!
//! Index and char modes treat an interval as a singleton when
//! `stop == start + 1` and print the raw `stop` otherwise. Named mode expands
//! each contained element (`start..stop`) individually.
//!
//! Whatever the mode, no names render as `{}`, a single name renders bare, and
//! two or more render as `{a, b, c}`.

use std::fmt;

use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::token::{TOKEN_EOF, TOKEN_EPSILON};

/// How an [`IntervalSet`] spells its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode<'a> {
    #[default]
    Index,
    Char,
    /// Every element is looked up through [`element_name`].
    ///
    /// Pass an empty slice for a table you don't have.
    Named {
        literal_names: &'a [String],
        symbolic_names: &'a [String],
    },
}

impl<'a> RenderMode<'a> {
    /// Picks the mode from optional name tables and a character flag.
    ///
    /// Any name table selects [`RenderMode::Named`]; otherwise `elems_are_char`
    /// chooses between char and index mode.
    pub fn select(
        literal_names: Option<&'a [String]>,
        symbolic_names: Option<&'a [String]>,
        elems_are_char: bool,
    ) -> Self {
        if literal_names.is_some() || symbolic_names.is_some() {
            Self::Named {
                literal_names: literal_names.unwrap_or_default(),
                symbolic_names: symbolic_names.unwrap_or_default(),
            }
        } else if elems_are_char {
            Self::Char
        } else {
            Self::Index
        }
    }
}

/// Display name of token type `a`.
///
/// Returns `<EOF>` and `<EPSILON>` for the sentinels, the literal name when it
/// exists and is non-empty, and the symbolic name otherwise.
///
/// # Panics
///
/// The name tables must cover every element being rendered. Panics if `a` is
/// negative (and not a sentinel) or has no literal name and lies outside
/// `symbolic_names`.
pub fn element_name<'a>(
    literal_names: &'a [String],
    symbolic_names: &'a [String],
    a: isize,
) -> &'a str {
    match a {
        TOKEN_EOF => "<EOF>",
        TOKEN_EPSILON => "<EPSILON>",
        _ => {
            let Ok(index) = usize::try_from(a) else {
                panic!("token type {a} is not a valid name table index");
            };
            match literal_names.get(index) {
                Some(literal) if !literal.is_empty() => literal.as_str(),
                _ => symbolic_names[index].as_str(),
            }
        }
    }
}

impl IntervalSet {
    /// Renders the set in the given mode.
    ///
    /// # Panics
    ///
    /// In [`RenderMode::Named`], panics under the same conditions as
    /// [`element_name`].
    pub fn render(&self, mode: RenderMode<'_>) -> String {
        if self.is_empty() {
            return "{}".to_string();
        }
        let names: Vec<String> = match mode {
            RenderMode::Index => self.intervals().iter().map(index_name).collect(),
            RenderMode::Char => self.intervals().iter().map(char_name).collect(),
            RenderMode::Named {
                literal_names,
                symbolic_names,
            } => self
                .intervals()
                .iter()
                .flat_map(Interval::iter)
                .map(|a| element_name(literal_names, symbolic_names, a).to_string())
                .collect(),
        };
        join_names(names)
    }

    /// Renders with optional name tables, choosing the mode as
    /// [`RenderMode::select`] does.
    pub fn to_string_verbose(
        &self,
        literal_names: Option<&[String]>,
        symbolic_names: Option<&[String]>,
        elems_are_char: bool,
    ) -> String {
        self.render(RenderMode::select(literal_names, symbolic_names, elems_are_char))
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::Index))
    }
}

fn is_singleton(interval: &Interval) -> bool {
    interval.stop == interval.start + 1
}

fn index_name(interval: &Interval) -> String {
    if is_singleton(interval) {
        if interval.start == TOKEN_EOF {
            "<EOF>".to_string()
        } else {
            interval.start.to_string()
        }
    } else {
        format!("{}..{}", interval.start, interval.stop)
    }
}

fn char_name(interval: &Interval) -> String {
    if is_singleton(interval) {
        if interval.start == TOKEN_EOF {
            "<EOF>".to_string()
        } else {
            quoted_char(interval.start)
        }
    } else {
        format!("{}..{}", quoted_char(interval.start), quoted_char(interval.stop))
    }
}

/// Identifiers that are not Unicode scalar values render as U+FFFD.
fn quoted_char(v: isize) -> String {
    let c = u32::try_from(v)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    format!("'{c}'")
}

fn join_names(mut names: Vec<String>) -> String {
    match names.len() {
        0 => "{}".to_string(),
        1 => names.remove(0),
        _ => format!("{{{}}}", names.join(", ")),
    }
}
