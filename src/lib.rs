// ============================================================================
// Decimal Matcher Library
// Decimal field validation with digit and decimal-place thresholds
// ============================================================================

//! # Decimal Matcher
//!
//! A field matcher that checks a value is a decimal number within
//! caller-supplied precision thresholds, reporting every violation found.
//!
//! ## Features
//!
//! - **Exact parsing** that keeps the written scale (`"1.50"` has 3 digits)
//! - **Stable error catalog** (`doubleNumber.e001`..`e003`) with end-user messages
//! - **Pure validation**: a fresh outcome per call, safe to share across threads
//! - **Pluggable** through the [`FieldMatcher`](interfaces::FieldMatcher) trait
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! // Up to 5 digits, at most 2 of them after the separator
//! let matcher = DecimalMatcher::from_thresholds(&[5, 2]).unwrap();
//!
//! assert!(matcher.validate(Some("123.45")).is_valid());
//! assert!(matcher.validate(None).is_valid());
//!
//! let outcome = matcher.validate(Some("1.234"));
//! assert!(outcome.has_error(ErrorKind::TooManyDecimalPlaces));
//!
//! let outcome = matcher.validate(Some("abc"));
//! assert_eq!(outcome.errors()[0].code(), "doubleNumber.e001");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ErrorKind, ErrorRecord, MatcherConfig, ValidationOutcome, DEFAULT_MAX_DIGITS,
    };
    pub use crate::engine::{
        create_from_config, create_from_thresholds, DecimalMatcher, DecimalMatcherBuilder,
    };
    pub use crate::interfaces::FieldMatcher;
    pub use crate::numeric::{NumberError, ParsedNumber};
}
