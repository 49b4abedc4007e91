//! Ukrainian Cyrillic → Latin transliteration engine.
//!
//! The engine is a table-ordered, case-preserving substring rewriter. A
//! [`SubstitutionTable`] is built once and passed by reference into
//! [`rewrite`] and [`transliterate`].

pub mod document;
pub mod rewrite;
pub mod settings;
pub mod table;
pub mod unicode;

pub use document::{DocumentError, TranslationDocument};
pub use rewrite::{rewrite, transliterate};
pub use table::{SubstitutionTable, TableEntry, TableError};
