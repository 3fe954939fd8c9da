use serde::{Deserialize, Serialize};

use crate::render::RenderMode;
use crate::token::TokenType;

/// Name tables for a grammar's token types, indexed by token type.
///
/// - literal names are the quoted spellings of fixed tokens (`'+'`);
/// - symbolic names are the rule names (`PLUS`, `ID`);
/// - display names, when present, override both for diagnostics.
///
/// An empty string means "no name in this table".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub literal_names: Vec<String>,
    pub symbolic_names: Vec<String>,
    pub display_names: Vec<String>,
}

impl Vocabulary {
    pub fn new(
        literal_names: Vec<String>,
        symbolic_names: Vec<String>,
        display_names: Vec<String>,
    ) -> Self {
        Self {
            literal_names,
            symbolic_names,
            display_names,
        }
    }

    /// Splits a combined token-name list into literal and symbolic tables.
    ///
    /// Names starting with `'` are literals, names starting with an uppercase
    /// letter are symbolic, anything else is dropped from both. The original
    /// list is kept as the display names.
    pub fn from_token_names(token_names: &[String]) -> Self {
        let mut literal_names = vec![String::new(); token_names.len()];
        let mut symbolic_names = vec![String::new(); token_names.len()];

        for (i, name) in token_names.iter().enumerate() {
            match name.chars().next() {
                Some('\'') => literal_names[i] = name.clone(),
                Some(c) if c.is_uppercase() => symbolic_names[i] = name.clone(),
                _ => {}
            }
        }

        Self::new(literal_names, symbolic_names, token_names.to_vec())
    }

    /// The highest token type any table names, or `None` for an empty vocabulary.
    pub fn max_token_type(&self) -> Option<usize> {
        self.literal_names
            .len()
            .max(self.symbolic_names.len())
            .max(self.display_names.len())
            .checked_sub(1)
    }

    pub fn literal_name(&self, token_type: TokenType) -> Option<&str> {
        match token_type {
            TokenType::User(raw) => lookup(&self.literal_names, raw),
            _ => None,
        }
    }

    /// Symbolic name of `token_type`; end of input is always `EOF`.
    pub fn symbolic_name(&self, token_type: TokenType) -> Option<&str> {
        match token_type {
            TokenType::Eof => Some("EOF"),
            TokenType::User(raw) => lookup(&self.symbolic_names, raw),
            _ => None,
        }
    }

    /// Best human-readable name: display, then literal, then symbolic, then
    /// the numeric form.
    pub fn display_name(&self, token_type: TokenType) -> String {
        if let TokenType::User(raw) = token_type
            && let Some(name) = lookup(&self.display_names, raw)
        {
            return name.to_string();
        }
        self.literal_name(token_type)
            .or_else(|| self.symbolic_name(token_type))
            .map_or_else(|| token_type.to_string(), str::to_string)
    }

    /// Named render mode backed by this vocabulary's literal and symbolic tables.
    pub fn render_mode(&self) -> RenderMode<'_> {
        RenderMode::Named {
            literal_names: &self.literal_names,
            symbolic_names: &self.symbolic_names,
        }
    }
}

fn lookup(table: &[String], raw: isize) -> Option<&str> {
    let index = usize::try_from(raw).ok()?;
    table
        .get(index)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}
