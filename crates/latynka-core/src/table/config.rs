use std::collections::HashSet;

use serde::Deserialize;

use super::TableError;

#[derive(Deserialize)]
struct TableConfig {
    mappings: Vec<(String, String)>,
}

/// Parse TOML text into the ordered list of `(pattern, replacement)` pairs.
pub fn parse_table_toml(toml_str: &str) -> Result<Vec<(String, String)>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    validate_pairs(&config.mappings)?;
    Ok(config.mappings)
}

/// Check the structural rules every substitution table must satisfy.
///
/// A pattern may not follow a shorter pattern it contains: the shorter one
/// would already have consumed its text.
pub fn validate_pairs(pairs: &[(String, String)]) -> Result<(), TableError> {
    if pairs.is_empty() {
        return Err(TableError::Empty);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(pairs.len());
    for (index, (pattern, replacement)) in pairs.iter().enumerate() {
        if pattern.is_empty() {
            return Err(TableError::EmptyPattern { index });
        }
        if replacement.is_empty() {
            return Err(TableError::EmptyReplacement(pattern.clone()));
        }
        if pattern.to_lowercase() != *pattern {
            return Err(TableError::NotLowercase(pattern.clone()));
        }
        if !seen.insert(pattern.as_str()) {
            return Err(TableError::Duplicate(pattern.clone()));
        }
        if let Some((earlier, _)) = pairs[..index].iter().find(|(earlier, _)| {
            earlier.len() < pattern.len() && pattern.contains(earlier.as_str())
        }) {
            return Err(TableError::Shadowed {
                pattern: pattern.clone(),
                earlier: earlier.clone(),
            });
        }
    }

    Ok(())
}
