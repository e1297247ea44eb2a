//! Controlled-vocabulary translation tables.
//!
//! Three independent translators map free-text cataloguing values to the
//! vocabularies harvesters expect:
//!
//! - [`language_of`]: language names and two-letter codes to ISO 639-2/B
//! - [`item_type_of`]: local type labels to the DCMI Type Vocabulary
//! - [`format_of`]: legacy Finnish MIME-like labels to IANA media types
//!
//! Lookups use [`normalize_key`]. Unknown languages and formats come back
//! unchanged; unknown item types fall back to [`DEFAULT_ITEM_TYPE`].

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// Item type used when a label has no vocabulary entry, already rendered.
pub const DEFAULT_ITEM_TYPE: &str = "Text";

/// Language names (Finnish) and ISO 639-1 codes to ISO 639-2/B codes.
pub const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("suomi", "fin"),
    ("fi", "fin"),
    ("englanti", "eng"),
    ("en", "eng"),
    ("ruotsi", "swe"),
    ("sv", "swe"),
    ("espanja", "spa"),
    ("es", "spa"),
    ("hollanti", "dut"),
    ("nl", "dut"),
    ("italia", "ita"),
    ("it", "ita"),
    ("latina", "lat"),
    ("la", "lat"),
    ("venäjä", "rus"),
    ("ru", "rus"),
    ("ranska", "fre"),
    ("fr", "fre"),
    ("saksa", "ger"),
    ("de", "ger"),
    ("viro", "est"),
    ("et", "est"),
];

/// Local item-type labels to DCMI Type terms, in lower-case spaced form.
pub const ITEM_TYPES: &[(&str, &str)] = &[
    ("document", "text"),
    ("still image", "still image"),
    ("artikkeli", "text"),
    ("artikkeliviite", "text"),
    ("website", "text"),
    ("linkki", "text"),
    ("kirje", "text"),
    ("käsikirjoitus", "text"),
    ("rakennuspiirustus", "image"),
    ("epub", "text"),
    ("teksti", "text"),
    ("kuva", "image"),
    ("ääni", "sound"),
];

/// Legacy MIME-like labels to IANA media types.
pub const FORMATS: &[(&str, &str)] = &[
    ("teksti/pdf", "application/pdf"),
    ("teksti/html", "text/html"),
    ("teksti/plain", "text/plain"),
    ("teksti/epub", "application/epub+zip"),
    ("kuva/jpeg", "image/jpeg"),
    ("kuva/jpg", "image/jpeg"),
    ("kuva/png", "image/png"),
    ("kuva/tiff", "image/tiff"),
    ("kuva/gif", "image/gif"),
    ("ääni/mpeg", "audio/mpeg"),
    ("ääni/mp3", "audio/mpeg"),
    ("ääni/wav", "audio/x-wav"),
    ("video/mpeg", "video/mpeg"),
    ("video/mp4", "video/mp4"),
    ("pdf", "application/pdf"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
];

lazy_static! {
    static ref LANGUAGE_TABLE: HashMap<&'static str, &'static str> =
        LANGUAGE_CODES.iter().copied().collect();
    static ref ITEM_TYPE_TABLE: HashMap<&'static str, &'static str> =
        ITEM_TYPES.iter().copied().collect();
    static ref FORMAT_TABLE: HashMap<&'static str, &'static str> =
        FORMATS.iter().copied().collect();
}

/// Normalize a value for table lookup: trim, NFC-compose, lower-case.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    value.trim().nfc().collect::<String>().to_lowercase()
}

/// Translate a language name or code to its ISO 639-2/B code.
///
/// Returns `value` unchanged when there is no entry.
///
/// # Examples
///
/// ```
/// use qdc_extended::vocabulary::language_of;
///
/// assert_eq!(language_of("fi"), "fin");
/// assert_eq!(language_of("Suomi"), "fin");
/// assert_eq!(language_of("unknown-code"), "unknown-code");
/// ```
#[must_use]
pub fn language_of(value: &str) -> Cow<'_, str> {
    match LANGUAGE_TABLE.get(normalize_key(value).as_str()) {
        Some(&code) => Cow::Borrowed(code),
        None => {
            trace!(value, "language passed through untranslated");
            Cow::Borrowed(value)
        },
    }
}

/// Translate an item-type label to a DCMI Type term.
///
/// The term is rendered capitalized with spaces removed (`"still image"`
/// becomes `"StillImage"`). Unknown and empty labels yield `"Text"`.
///
/// # Examples
///
/// ```
/// use qdc_extended::vocabulary::item_type_of;
///
/// assert_eq!(item_type_of("kuva"), "Image");
/// assert_eq!(item_type_of("still image"), "StillImage");
/// assert_eq!(item_type_of(""), "Text");
/// ```
#[must_use]
pub fn item_type_of(value: &str) -> String {
    ITEM_TYPE_TABLE
        .get(normalize_key(value).as_str())
        .map(|term| render_type_term(term))
        .unwrap_or_else(|| DEFAULT_ITEM_TYPE.to_string())
}

/// Translate a legacy format label to an IANA media type.
///
/// Returns `value` unchanged when there is no entry.
#[must_use]
pub fn format_of(value: &str) -> Cow<'_, str> {
    match FORMAT_TABLE.get(normalize_key(value).as_str()) {
        Some(&mime) => Cow::Borrowed(mime),
        None => Cow::Borrowed(value),
    }
}

/// Capitalize each word and drop the spaces between them.
fn render_type_term(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(language_of("fi"), "fin");
        assert_eq!(language_of("englanti"), "eng");
        assert_eq!(language_of("sv"), "swe");
        assert_eq!(language_of("venäjä"), "rus");
        assert_eq!(language_of("de"), "ger");
    }

    #[test]
    fn test_language_identity_fallback() {
        assert_eq!(language_of("unknown-code"), "unknown-code");
        assert_eq!(language_of("Klingon"), "Klingon");
    }

    #[test]
    fn test_language_lookup_is_case_insensitive() {
        assert_eq!(language_of("  FI "), "fin");
        assert_eq!(language_of("Ruotsi"), "swe");
    }

    #[test]
    fn test_language_decomposed_input() {
        // "venäjä" with combining diaeresis
        let decomposed = "vena\u{0308}ja\u{0308}";
        assert_eq!(language_of(decomposed), "rus");
    }

    #[test]
    fn test_item_types() {
        assert_eq!(item_type_of("kuva"), "Image");
        assert_eq!(item_type_of("still image"), "StillImage");
        assert_eq!(item_type_of("ääni"), "Sound");
        assert_eq!(item_type_of("rakennuspiirustus"), "Image");
        assert_eq!(item_type_of("Document"), "Text");
        assert_eq!(item_type_of("video"), "Text");
        assert_eq!(item_type_of("sound"), "Text");
        assert_eq!(item_type_of("moving image"), "Text");
    }

    #[test]
    fn test_item_type_default() {
        assert_eq!(item_type_of(""), "Text");
        assert_eq!(item_type_of(""), DEFAULT_ITEM_TYPE);
        assert_eq!(item_type_of("dataset of things"), "Text");
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_of("teksti/pdf"), "application/pdf");
        assert_eq!(format_of("Kuva/JPEG"), "image/jpeg");
        assert_eq!(format_of("application/xml"), "application/xml");
    }

    #[test]
    fn test_render_type_term() {
        assert_eq!(render_type_term("moving image"), "MovingImage");
        assert_eq!(render_type_term("text"), "Text");
        assert_eq!(render_type_term(""), "");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for table in [LANGUAGE_CODES, ITEM_TYPES, FORMATS] {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
            let len = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), len);
        }
    }
}
