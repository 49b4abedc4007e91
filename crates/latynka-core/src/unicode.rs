//! Character-level script checks used to report untransliterated text.

use crate::document::TranslationDocument;

/// Check the Cyrillic and Cyrillic Supplement blocks (U+0400..U+052F).
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{052F}').contains(&c)
}

pub fn contains_cyrillic(s: &str) -> bool {
    s.chars().any(is_cyrillic)
}

/// Keys whose values still contain Cyrillic characters, in document order.
///
/// After transliteration these are the strings using letters the table
/// has no entry for (e.g. `ь` after a hard consonant, or `ё`).
pub fn residual_cyrillic(document: &TranslationDocument) -> Vec<&str> {
    document
        .iter()
        .filter(|(_, value)| contains_cyrillic(value))
        .map(|(key, _)| key)
        .collect()
}
