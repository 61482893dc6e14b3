//! Compound field parsing
//!
//! Brands and categories are stored as comma-delimited strings. Parsing splits
//! on commas, trims each piece and drops pieces that end up empty, keeping the
//! source order. It never fails.

/// Delimiter between tokens of a compound field
pub const FIELD_DELIMITER: char = ',';

/// Split a compound field into its ordered, trimmed, non-empty tokens
///
/// `None` (a missing cell) and the empty string both yield an empty list.
pub fn parse_field(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) => raw
            .split(FIELD_DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
