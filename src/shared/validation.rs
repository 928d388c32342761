use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating prompt type identifiers
    /// Must be lowercase snake_case starting with a letter
    /// - Valid: "sql", "dynamic_sql", "chart2"
    /// - Invalid: "SQL", "_sql", "dynamic-sql", "2chart", "dynamic sql"
    pub static ref PROMPT_TYPE_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

/// Escape LIKE/ILIKE wildcards so user input is matched literally.
/// Uses the PostgreSQL default escape character (`\`).
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Trimmed value of an optional text filter, `None` when blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
