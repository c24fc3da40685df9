use thiserror::Error;

/// Errors returned by the zip code lookup and validation functions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZipCodeError {
    /// A required string argument was missing, empty or whitespace only.
    #[error("'{name}' must not be null, empty or blank")]
    InvalidArgument {
        /// Name of the offending argument (e.g. "countryCode").
        name: &'static str,
    },

    /// An embedded table entry does not compile. Indicates a defect in the
    /// table itself, never a caller error.
    #[error("zip code pattern for '{country_code}' does not compile: {source}")]
    InvalidPattern {
        /// Country whose table entry is broken.
        country_code: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl ZipCodeError {
    /// Argument name reported for country code failures.
    pub const COUNTRY_CODE: &'static str = "countryCode";
    /// Argument name reported for zip code failures.
    pub const ZIP_CODE: &'static str = "zipCode";

    /// Create an [`InvalidArgument`](Self::InvalidArgument) error for `name`.
    pub fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }
}

/// Return `value` unchanged if it is present and contains at least one
/// non-whitespace character.
pub(crate) fn require_non_blank<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ZipCodeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ZipCodeError::invalid_argument(name)),
    }
}
