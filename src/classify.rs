//! Subject classification heuristic.
//!
//! Finnish libraries catalogue YKL (public library classification) codes in
//! the same subject field as topical terms. A value counts as a
//! classification code when it starts with a digit, contains no letters, and
//! does not start with `18` or `19`, which would make it look like a year.
//!
//! The year exclusion also rejects genuine codes in classes 18 and 19; the
//! rule is kept as-is so output stays compatible with existing harvests.

use lazy_static::lazy_static;
use regex::Regex;

/// Scheme attribute value for classification codes.
pub const YKL_SCHEME: &str = "YKL";

lazy_static! {
    static ref NUMERIC_CODE: Regex =
        Regex::new(r"^[0-9]\P{L}*$").expect("numeric code pattern is valid");
}

/// Returns true if `value` is a numeric classification code rather than a
/// plain-text subject.
///
/// # Examples
///
/// ```
/// use qdc_extended::classify::is_classification_code;
///
/// assert!(is_classification_code("616.2"));
/// assert!(!is_classification_code("1923"));
/// assert!(!is_classification_code("Cats"));
/// ```
#[must_use]
pub fn is_classification_code(value: &str) -> bool {
    let value = value.trim();
    NUMERIC_CODE.is_match(value) && !looks_like_year(value)
}

fn looks_like_year(value: &str) -> bool {
    value.starts_with("18") || value.starts_with("19")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_code() {
        assert!(is_classification_code("616.2"));
        assert!(is_classification_code("84.2"));
        assert!(is_classification_code(" 99.1 "));
    }

    #[test]
    fn test_years_are_not_codes() {
        assert!(!is_classification_code("1923"));
        assert!(!is_classification_code("1850-1870"));
    }

    #[test]
    fn test_text_is_not_code() {
        assert!(!is_classification_code("Cats"));
        assert!(!is_classification_code("2nd world war"));
        assert!(!is_classification_code("616.2 Ä"));
    }

    #[test]
    fn test_must_start_with_digit() {
        assert!(!is_classification_code(".5"));
        assert!(!is_classification_code(""));
    }

    #[test]
    fn test_known_misclassifications_are_preserved() {
        // Class 19 codes are rejected as years, and a 20xx year passes as a code.
        assert!(!is_classification_code("19.2"));
        assert!(is_classification_code("2004"));
    }
}
