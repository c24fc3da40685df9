use serde::{Deserialize, Serialize};

use super::error::{ZipCodeError, require_non_blank};
use super::validator::is_valid_zip_code;

/// A country/zip code pair as received from a form or JSON payload.
///
/// Either field may be missing (`null` or absent in JSON); a missing field
/// fails validation the same way an empty or blank one does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeQuery {
    /// Country code the zip code belongs to (e.g. "DE").
    #[serde(default)]
    pub country_code: Option<String>,
    /// The zip code to check.
    #[serde(default)]
    pub zip_code: Option<String>,
}

impl ZipCodeQuery {
    /// Create a query with both fields present.
    pub fn new(country_code: impl Into<String>, zip_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            zip_code: Some(zip_code.into()),
        }
    }

    /// Validate the zip code against the country's registered format.
    ///
    /// # Errors
    ///
    /// [`ZipCodeError::InvalidArgument`] for a missing or blank field,
    /// reporting `countryCode` before `zipCode`.
    pub fn is_valid(&self) -> Result<bool, ZipCodeError> {
        let country_code =
            require_non_blank(ZipCodeError::COUNTRY_CODE, self.country_code.as_deref())?;
        let zip_code = require_non_blank(ZipCodeError::ZIP_CODE, self.zip_code.as_deref())?;
        is_valid_zip_code(country_code, zip_code)
    }
}
