//! Centralized validation and helper functions.

/// Separator between tags in FORMAT values and between values in sample fields
pub const TAG_SEPARATOR: char = ':';

/// Placeholder substituted for every tag when no sample values are supplied
pub const DEFAULT_TAG_VALUE: &str = "1";

/// VCF missing value, used to pad existing samples when a tag is added
pub const MISSING_VALUE: &str = ".";

/// Number of colon-separated tokens in a FORMAT or sample value.
///
/// # Examples
///
/// ```
/// use vcf_edit::utils::validation::tag_count;
///
/// assert_eq!(tag_count("GT"), 1);
/// assert_eq!(tag_count("GT:DP:GQ"), 3);
/// assert_eq!(tag_count("0/1:12:99"), 3);
/// ```
#[must_use]
pub fn tag_count(value: &str) -> usize {
    value.split(TAG_SEPARATOR).count()
}

/// Default sample value for a FORMAT value: every tag identifier replaced by `1`.
///
/// Tokens without an identifier character, such as the missing value `.`,
/// are kept as they are.
///
/// # Examples
///
/// ```
/// use vcf_edit::utils::validation::default_sample_value;
///
/// assert_eq!(default_sample_value("GT"), "1");
/// assert_eq!(default_sample_value("GT:DP:GQ"), "1:1:1");
/// assert_eq!(default_sample_value("."), ".");
/// ```
#[must_use]
pub fn default_sample_value(format: &str) -> String {
    format
        .split(TAG_SEPARATOR)
        .map(|token| {
            if token.chars().any(|c| c.is_alphanumeric() || c == '_') {
                DEFAULT_TAG_VALUE
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

/// Which kind of identifier is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// A FORMAT tag ID, which appears inside colon-separated FORMAT values
    FormatTag,
    /// A sample ID, which becomes a header column
    Sample,
}

/// Check that an identifier can be written into a VCF without breaking its
/// line, column, or tag structure.
///
/// Returns a description of the problem, or `None` if the identifier is usable.
#[must_use]
pub fn check_identifier(id: &str, kind: IdentifierKind) -> Option<&'static str> {
    if id.is_empty() {
        return Some("identifier is empty");
    }
    if id.contains(['\t', '\n', '\r']) {
        return Some("identifier contains a tab or line break");
    }
    if kind == IdentifierKind::FormatTag {
        if id.contains(TAG_SEPARATOR) {
            return Some("FORMAT identifier contains ':'");
        }
        if id.chars().any(char::is_whitespace) {
            return Some("FORMAT identifier contains whitespace");
        }
        if id.contains([',', '=', '<', '>']) {
            return Some("FORMAT identifier contains a metadata delimiter");
        }
    }
    None
}
