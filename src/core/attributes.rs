use std::collections::HashSet;

/// Parse a free-text comma-separated attribute field into a normalized set
///
/// Tokens are trimmed, lowercased and deduplicated; empty tokens are dropped.
/// `None` or blank input yields the empty set. Every comparison of attribute
/// fields in the scorer goes through this function so that "Python, SQL" and
/// "sql,python" compare equal.
pub fn parse_attribute_set(raw: Option<&str>) -> HashSet<String> {
    match raw {
        Some(text) if !text.trim().is_empty() => text
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect(),
        _ => HashSet::new(),
    }
}

/// Normalized, sorted list form of a comma-separated attribute field
///
/// Used by display DTOs that return attribute lists instead of raw text.
pub fn attribute_list(raw: Option<&str>) -> Vec<String> {
    let mut tokens: Vec<String> = parse_attribute_set(raw).into_iter().collect();
    tokens.sort();
    tokens
}
