fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    let table = validate_toml(
        "src/table/default_table.toml",
        include_str!("src/table/default_table.toml"),
    );
    validate_table("src/table/default_table.toml", &table);
}

fn validate_toml(path: &str, content: &str) -> toml::Value {
    match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    }
}

/// The same structural rules the table loader enforces, so a bad embedded
/// table fails the build instead of panicking in `SubstitutionTable::default`.
fn validate_table(path: &str, table: &toml::Value) {
    let Some(mappings) = table.get("mappings").and_then(toml::Value::as_array) else {
        panic!("{path}: `mappings` must be an array");
    };
    if mappings.is_empty() {
        panic!("{path}: `mappings` is empty");
    }

    let mut patterns: Vec<&str> = Vec::with_capacity(mappings.len());
    for (index, pair) in mappings.iter().enumerate() {
        let pair = pair.as_array().map(Vec::as_slice).unwrap_or_default();
        let [pattern, replacement] = pair else {
            panic!("{path}: mapping {index} must be a [pattern, replacement] pair");
        };
        let (Some(pattern), Some(replacement)) = (pattern.as_str(), replacement.as_str()) else {
            panic!("{path}: mapping {index} must contain two strings");
        };
        if pattern.is_empty() || replacement.is_empty() {
            panic!("{path}: mapping {index} has an empty side");
        }
        if pattern.to_lowercase() != pattern {
            panic!("{path}: pattern {pattern:?} is not lowercase");
        }
        if patterns.contains(&pattern) {
            panic!("{path}: duplicate pattern {pattern:?}");
        }
        if let Some(earlier) = patterns
            .iter()
            .find(|earlier| earlier.len() < pattern.len() && pattern.contains(**earlier))
        {
            panic!("{path}: pattern {pattern:?} follows {earlier:?}, which contains it");
        }
        patterns.push(pattern);
    }
}
