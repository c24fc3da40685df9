//! Zip code pattern lookup, compilation and full-string validation.

use regex::{Regex, RegexBuilder};

use super::error::{ZipCodeError, require_non_blank};
use super::patterns::entry;

/// A compiled zip code pattern for one country.
///
/// Matching is always against the whole input: `"140001"` does not match
/// `[1-7]\d{4}` even though it contains a matching prefix.
#[derive(Debug, Clone)]
pub struct ZipCodePattern {
    country_code: &'static str,
    text: &'static str,
    regex: Regex,
}

impl ZipCodePattern {
    fn compile(country_code: &'static str, text: &'static str) -> Result<Self, ZipCodeError> {
        // ASCII classes: `\d` must not accept non-Latin digits.
        let regex = RegexBuilder::new(&format!("^(?:{text})$"))
            .unicode(false)
            .build()
            .map_err(|source| {
                tracing::error!(
                    country_code,
                    pattern = text,
                    "embedded zip code pattern does not compile"
                );
                ZipCodeError::InvalidPattern {
                    country_code: country_code.into(),
                    source,
                }
            })?;
        Ok(Self {
            country_code,
            text,
            regex,
        })
    }

    /// Country code this pattern was registered under.
    pub fn country_code(&self) -> &'static str {
        self.country_code
    }

    /// The pattern source text, exactly as stored in the table.
    pub fn as_str(&self) -> &'static str {
        self.text
    }

    /// Whether `zip_code` matches this pattern from start to end.
    pub fn is_match(&self, zip_code: &str) -> bool {
        self.regex.is_match(zip_code)
    }

    /// The underlying anchored regex, e.g. for capture group extraction.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl std::fmt::Display for ZipCodePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Validate `country_code` and look up its `(key, pattern)` table entry.
fn lookup(country_code: &str) -> Result<Option<(&'static str, &'static str)>, ZipCodeError> {
    let country_code = require_non_blank(ZipCodeError::COUNTRY_CODE, Some(country_code))?;
    let found = entry(country_code);
    if found.is_none() {
        tracing::debug!(country_code, "no zip code format registered");
    }
    Ok(found)
}

/// Return the zip code regex text registered for `country_code`.
///
/// Returns `Ok(None)` when the country has no registered format.
///
/// # Errors
///
/// [`ZipCodeError::InvalidArgument`] if `country_code` is empty or blank.
pub fn zip_code_regex_text(country_code: &str) -> Result<Option<&'static str>, ZipCodeError> {
    Ok(lookup(country_code)?.map(|(_, text)| text))
}

/// Return the compiled zip code pattern for `country_code`.
///
/// Returns `Ok(None)` without compiling anything when the country has no
/// registered format.
///
/// # Errors
///
/// - [`ZipCodeError::InvalidArgument`] if `country_code` is empty or blank.
/// - [`ZipCodeError::InvalidPattern`] if the table entry does not compile.
pub fn zip_code_pattern(country_code: &str) -> Result<Option<ZipCodePattern>, ZipCodeError> {
    match lookup(country_code)? {
        Some((code, text)) => ZipCodePattern::compile(code, text).map(Some),
        None => Ok(None),
    }
}

/// Check whether `zip_code` is a valid postal code for `country_code`.
///
/// `country_code` is checked before `zip_code`. A country without a
/// registered format yields `Ok(false)`.
///
/// ```rust
/// use zipcode::core::is_valid_zip_code;
///
/// assert!(is_valid_zip_code("XK", "14000").unwrap());
/// assert!(!is_valid_zip_code("XK", "84000").unwrap());
/// assert!(!is_valid_zip_code("ABC", "14000").unwrap());
/// assert!(is_valid_zip_code("XK", " ").is_err());
/// ```
///
/// # Errors
///
/// - [`ZipCodeError::InvalidArgument`] if either argument is empty or blank.
/// - [`ZipCodeError::InvalidPattern`] if the table entry does not compile.
pub fn is_valid_zip_code(country_code: &str, zip_code: &str) -> Result<bool, ZipCodeError> {
    require_non_blank(ZipCodeError::COUNTRY_CODE, Some(country_code))?;
    require_non_blank(ZipCodeError::ZIP_CODE, Some(zip_code))?;

    Ok(zip_code_pattern(country_code)?.is_some_and(|pattern| pattern.is_match(zip_code)))
}

/// Whether a zip code format is registered for `country_code`.
///
/// # Errors
///
/// [`ZipCodeError::InvalidArgument`] if `country_code` is empty or blank.
pub fn has_zip_code_format(country_code: &str) -> Result<bool, ZipCodeError> {
    Ok(zip_code_regex_text(country_code)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANKS: [&str; 3] = ["", "      ", "\t"];

    fn assert_country_error(err: ZipCodeError) {
        assert_eq!(
            err.to_string(),
            "'countryCode' must not be null, empty or blank"
        );
    }

    #[test]
    fn regex_text_for_known_country() {
        assert_eq!(
            zip_code_regex_text("AR").unwrap(),
            Some(r"((?:[A-HJ-NP-Z])?\d{4})([A-Z]{3})?")
        );
    }

    #[test]
    fn regex_text_for_unknown_country() {
        assert_eq!(zip_code_regex_text("ABC").unwrap(), None);
    }

    #[test]
    fn regex_text_rejects_blank() {
        for blank in BLANKS {
            assert_country_error(zip_code_regex_text(blank).unwrap_err());
        }
    }

    #[test]
    fn pattern_for_known_country() {
        let pattern = zip_code_pattern("XK").unwrap().unwrap();
        assert_eq!(pattern.as_str(), r"[1-7]\d{4}");
        assert_eq!(pattern.country_code(), "XK");
        assert_eq!(pattern.to_string(), r"[1-7]\d{4}");
    }

    #[test]
    fn pattern_for_unknown_country() {
        assert!(zip_code_pattern("XYZ").unwrap().is_none());
    }

    #[test]
    fn pattern_rejects_blank() {
        for blank in BLANKS {
            assert_country_error(zip_code_pattern(blank).unwrap_err());
        }
    }

    #[test]
    fn pattern_matches_whole_input_only() {
        let pattern = zip_code_pattern("XK").unwrap().unwrap();
        assert!(pattern.is_match("14000"));
        assert!(!pattern.is_match("140001"));
        assert!(!pattern.is_match("x14000"));
        assert!(!pattern.is_match(" 14000"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        // LI is `948[5-9]|949[0-8]`; both branches must be anchored.
        let pattern = zip_code_pattern("LI").unwrap().unwrap();
        assert!(pattern.is_match("9485"));
        assert!(pattern.is_match("9490"));
        assert!(!pattern.is_match("94851"));
        assert!(!pattern.is_match("19490"));
    }

    #[test]
    fn digits_are_ascii_only() {
        // Arabic-Indic digits
        assert!(!is_valid_zip_code("XK", "\u{0661}\u{0664}\u{0660}\u{0660}\u{0660}").unwrap());
    }

    #[test]
    fn capture_groups_available() {
        let pattern = zip_code_pattern("AR").unwrap().unwrap();
        let caps = pattern.regex().captures("C1425DKH").unwrap();
        assert_eq!(&caps[1], "C1425");
        assert_eq!(&caps[2], "DKH");
    }

    #[test]
    fn valid_zip_code() {
        assert!(is_valid_zip_code("XK", "14000").unwrap());
    }

    #[test]
    fn invalid_zip_code() {
        assert!(!is_valid_zip_code("XK", "84000").unwrap());
    }

    #[test]
    fn unknown_country_is_not_valid() {
        assert!(!is_valid_zip_code("ABC", "14000").unwrap());
    }

    #[test]
    fn country_checked_before_zip() {
        assert_country_error(is_valid_zip_code("", "").unwrap_err());
        assert_country_error(is_valid_zip_code("  ", "14000").unwrap_err());
    }

    #[test]
    fn blank_zip_rejected() {
        for blank in BLANKS {
            let err = is_valid_zip_code("XK", blank).unwrap_err();
            assert_eq!(err.to_string(), "'zipCode' must not be null, empty or blank");
        }
    }

    #[test]
    fn blank_zip_rejected_for_unknown_country() {
        assert!(matches!(
            is_valid_zip_code("ABC", " ").unwrap_err(),
            ZipCodeError::InvalidArgument { name: "zipCode" }
        ));
    }

    #[test]
    fn has_format() {
        assert!(has_zip_code_format("AR").unwrap());
        assert!(!has_zip_code_format("ABC").unwrap());
        assert!(has_zip_code_format("").is_err());
    }
}
