/// Lowercase, title-case and uppercase spellings of one side of a table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasingTriple {
    pub lower: String,
    pub title: String,
    pub upper: String,
}

impl CasingTriple {
    /// Build the triple for `text`.
    ///
    /// When `collapse_title` is set the title form is the full uppercase form,
    /// otherwise only the first character is uppercased.
    pub fn new(text: &str, collapse_title: bool) -> Self {
        let lower = text.to_lowercase();
        let upper = lower.to_uppercase();
        let title = if collapse_title {
            upper.clone()
        } else {
            title_case(&lower)
        };
        Self { lower, title, upper }
    }
}

/// Uppercase the first character and keep the rest as given.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}
