//! Naming helpers for generated Python identifiers.

/// Python reserved words that cannot be used as parameter or property names.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Converts a schema name to PascalCase.
///
/// Underscores and hyphens separate words; the first character of every word
/// is upper-cased and the rest is kept as written, so `error_x` becomes
/// `ErrorX` and `scatter3d` becomes `Scatter3d`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(['_', '-']) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Converts a schema name to a lower-cased Python identifier.
#[must_use]
pub fn to_ident(s: &str) -> String {
    s.replace('-', "_").to_lowercase()
}

/// Returns true if `s` is usable as a Python identifier.
#[must_use]
pub fn is_python_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !is_python_keyword(s)
}

/// Returns true if `s` is a Python reserved word.
#[must_use]
pub fn is_python_keyword(s: &str) -> bool {
    PYTHON_KEYWORDS.contains(&s)
}
