// ============================================================================
// Matcher Configuration
// Precision thresholds for decimal field validation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit threshold applied when the caller does not supply one.
pub const DEFAULT_MAX_DIGITS: u32 = 11;

/// Most thresholds the positional form accepts (digits, then decimal places).
const MAX_POSITIONAL_THRESHOLDS: usize = 2;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while building a configuration from positional thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// More than two thresholds were supplied
    TooManyThresholds(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyThresholds(count) => write!(
                f,
                "too many thresholds: expected at most {MAX_POSITIONAL_THRESHOLDS}, got {count}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Matcher Configuration
// ============================================================================

/// Thresholds a decimal matcher validates against.
///
/// The digit check always runs; the decimal-place check runs only when
/// `max_decimal_places` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatcherConfig {
    /// Maximum number of significant digits (trailing zeros included)
    pub max_digits: u32,

    /// Optional: Maximum number of digits after the decimal separator
    /// None disables the decimal-place check
    pub max_decimal_places: Option<u32>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            max_decimal_places: None,
        }
    }
}

impl MatcherConfig {
    /// Create a configuration with both checks active
    pub fn new(max_digits: u32, max_decimal_places: u32) -> Self {
        Self {
            max_digits,
            max_decimal_places: Some(max_decimal_places),
        }
    }

    /// Build from the positional threshold form.
    ///
    /// - `[]`: 11 digits, no decimal-place check
    /// - `[d]`: `d` digits, no decimal-place check
    /// - `[d, p]`: `d` digits and at most `p` decimal places
    ///
    /// # Errors
    /// Returns `TooManyThresholds` for more than two thresholds.
    pub fn from_thresholds(thresholds: &[u32]) -> Result<Self, ConfigError> {
        match *thresholds {
            [] => Ok(Self::default()),
            [max_digits] => Ok(Self::default().with_max_digits(max_digits)),
            [max_digits, max_decimal_places] => Ok(Self::new(max_digits, max_decimal_places)),
            _ => Err(ConfigError::TooManyThresholds(thresholds.len())),
        }
    }

    /// Builder method: Set maximum number of digits
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Builder method: Set maximum number of decimal places
    pub fn with_max_decimal_places(mut self, max_decimal_places: u32) -> Self {
        self.max_decimal_places = Some(max_decimal_places);
        self
    }

    /// Builder method: Disable the decimal-place check
    pub fn without_decimal_places_check(mut self) -> Self {
        self.max_decimal_places = None;
        self
    }

    /// Whether the decimal-place check runs
    pub fn checks_decimal_places(&self) -> bool {
        self.max_decimal_places.is_some()
    }
}
