//! The rewrite fold.
//!
//! Every table entry is applied to the whole text, in table order, as three
//! literal global replacements: lowercase, title case, then uppercase. Each
//! replacement sees the output of the previous one.
//!
//! A one-letter pattern's title form is its uppercase form, so the title pass
//! already consumes uppercase occurrences. For a one-letter pattern with a
//! multi-letter replacement that yields the title-cased replacement even in
//! an all-caps word: `ЯЛОВИЧИНА` becomes `JaLOVYČYNA`.

use tracing::{debug, debug_span, Level};

use crate::document::TranslationDocument;
use crate::table::{SubstitutionTable, TableEntry};

/// Transliterate a single string.
pub fn rewrite(table: &SubstitutionTable, text: &str) -> String {
    table
        .entries()
        .iter()
        .fold(text.to_owned(), |text, entry| apply_entry(entry, text))
}

/// Transliterate every value of `document`. Keys and their order are kept.
pub fn transliterate(
    table: &SubstitutionTable,
    document: &TranslationDocument,
) -> TranslationDocument {
    let _span = debug_span!("transliterate", entries = document.len()).entered();
    let result: TranslationDocument = document
        .iter()
        .map(|(key, value)| (key.to_owned(), rewrite(table, value)))
        .collect();
    if tracing::enabled!(Level::DEBUG) {
        let changed = document
            .iter()
            .zip(result.iter())
            .filter(|((_, before), (_, after))| before != after)
            .count();
        debug!(changed, total = result.len(), "transliteration finished");
    }
    result
}

fn apply_entry(entry: &TableEntry, text: String) -> String {
    let (pattern, replacement) = (entry.pattern(), entry.replacement());
    let text = replace_literal(text, &pattern.lower, &replacement.lower);
    let text = replace_literal(text, &pattern.title, &replacement.title);
    replace_literal(text, &pattern.upper, &replacement.upper)
}

fn replace_literal(text: String, from: &str, to: &str) -> String {
    if text.contains(from) {
        text.replace(from, to)
    } else {
        text
    }
}
