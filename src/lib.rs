//! # zipcode
//!
//! Postal (zip) code validation keyed by country code.
//!
//! Each supported country maps to a regular expression describing the
//! syntax of its postal codes. The table is embedded at compile time and
//! never changes at runtime, so every function here is safe to call from
//! any thread without synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use zipcode::core::*;
//!
//! assert_eq!(zip_code_regex_text("XK").unwrap(), Some(r"[1-7]\d{4}"));
//! assert!(zip_code_regex_text("ABC").unwrap().is_none());
//!
//! let pattern = zip_code_pattern("XK").unwrap().unwrap();
//! assert_eq!(pattern.as_str(), r"[1-7]\d{4}");
//!
//! assert!(is_valid_zip_code("XK", "14000").unwrap());
//! assert!(!is_valid_zip_code("XK", "84000").unwrap());
//!
//! let err = is_valid_zip_code("", "14000").unwrap_err();
//! assert_eq!(err.to_string(), "'countryCode' must not be null, empty or blank");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Pattern table, lookup and validation |
//!
//! ## Logging
//!
//! Lookups emit [`tracing`] events (`debug` for countries without a
//! registered format, `error` for a table entry that fails to compile).
//! Install a subscriber in the application to see them.

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
