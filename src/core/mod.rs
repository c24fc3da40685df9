//! Zip code lookup and validation keyed by country code.
//!
//! The country → pattern table is embedded in the binary and never changes
//! at runtime. All operations validate their string arguments first and
//! report blank input as [`ZipCodeError::InvalidArgument`]; an unknown
//! country is a normal outcome (`None` or `false`), not an error.

mod error;
mod patterns;
mod query;
mod validator;

pub use error::*;
pub use patterns::supported_country_codes;
pub use query::ZipCodeQuery;
pub use validator::*;
