//! The ordered substitution table driving the rewriter.
//!
//! Entries are kept in file order. Each entry carries the casing triples of
//! its pattern and replacement, derived once when the table is built.

mod casing;
mod config;

use std::fs;
use std::io;
use std::path::Path;

pub use casing::{title_case, CasingTriple};
pub use config::{parse_table_toml, validate_pairs};

use casing::is_single_char;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("mappings table is empty")]
    Empty,
    #[error("empty pattern at index {index}")]
    EmptyPattern { index: usize },
    #[error("empty replacement for pattern: {0}")]
    EmptyReplacement(String),
    #[error("pattern is not lowercase: {0}")]
    NotLowercase(String),
    #[error("duplicate pattern: {0}")]
    Duplicate(String),
    #[error("pattern '{pattern}' is listed after '{earlier}', which it contains")]
    Shadowed { pattern: String, earlier: String },
}

/// One `(pattern, replacement)` pair with its derived spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pattern: CasingTriple,
    replacement: CasingTriple,
}

impl TableEntry {
    fn new(pattern: &str, replacement: &str) -> Self {
        let single = is_single_char(pattern);
        Self {
            // A one-letter pattern has no distinct title form.
            pattern: CasingTriple::new(pattern, single),
            replacement: CasingTriple::new(replacement, single && is_single_char(replacement)),
        }
    }

    pub fn pattern(&self) -> &CasingTriple {
        &self.pattern
    }

    pub fn replacement(&self) -> &CasingTriple {
        &self.replacement
    }
}

/// Immutable, ordered list of substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<TableEntry>,
}

impl SubstitutionTable {
    /// Build a table from ordered pairs, validating them first.
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(p, r)| (p.into(), r.into()))
            .collect();
        validate_pairs(&pairs)?;
        Ok(Self::from_validated(&pairs))
    }

    /// Parse table TOML. `parse_table_toml` already validates the pairs.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self::from_validated(&parse_table_toml(toml_str)?))
    }

    fn from_validated(pairs: &[(String, String)]) -> Self {
        Self {
            entries: pairs.iter().map(|(p, r)| TableEntry::new(p, r)).collect(),
        }
    }

    /// Read and parse a table TOML file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::from_toml(DEFAULT_TABLE_TOML).expect("default table TOML must be valid")
    }
}
