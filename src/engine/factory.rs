// ============================================================================
// Matcher Factory
// Creates decimal matchers from configuration
// ============================================================================

use crate::domain::{ConfigError, MatcherConfig};
use crate::engine::DecimalMatcher;
use crate::interfaces::FieldMatcher;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a boxed matcher from configuration, for pipelines that hold
/// heterogeneous field matchers.
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = create_from_config(MatcherConfig::new(5, 2));
/// assert_eq!(matcher.name(), "decimalNumber");
/// assert!(matcher.validate(Some("123.45")).is_valid());
/// ```
pub fn create_from_config(config: MatcherConfig) -> Box<dyn FieldMatcher> {
    Box::new(DecimalMatcher::new(config))
}

/// Creates a boxed matcher from the positional 0/1/2 threshold form.
///
/// # Errors
/// Returns `TooManyThresholds` for more than two thresholds.
pub fn create_from_thresholds(thresholds: &[u32]) -> Result<Box<dyn FieldMatcher>, ConfigError> {
    let config = MatcherConfig::from_thresholds(thresholds)?;
    Ok(create_from_config(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating decimal matchers with fluent API
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalMatcherBuilder::new()
///     .max_digits(8)
///     .max_decimal_places(2)
///     .build();
///
/// assert!(matcher.validate(Some("123456.78")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalMatcherBuilder {
    config: MatcherConfig,
}

impl DecimalMatcherBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of significant digits
    pub fn max_digits(mut self, max_digits: u32) -> Self {
        self.config.max_digits = max_digits;
        self
    }

    /// Enable the decimal-place check with the given maximum
    pub fn max_decimal_places(mut self, max_decimal_places: u32) -> Self {
        self.config.max_decimal_places = Some(max_decimal_places);
        self
    }

    /// Build the matcher
    pub fn build(self) -> DecimalMatcher {
        DecimalMatcher::new(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &MatcherConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let matcher = create_from_config(MatcherConfig::default());
        assert_eq!(matcher.name(), "decimalNumber");
        assert!(!matcher.validate(Some("123456789012")).is_valid());
    }

    #[test]
    fn test_create_from_thresholds() {
        let matcher = create_from_thresholds(&[5, 2]).unwrap();
        let outcome = matcher.validate(Some("1.234"));
        assert_eq!(outcome.codes().collect::<Vec<_>>(), vec!["doubleNumber.e003"]);

        assert!(matches!(
            create_from_thresholds(&[1, 2, 3]),
            Err(ConfigError::TooManyThresholds(3))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = DecimalMatcherBuilder::new().max_digits(4).max_decimal_places(1);
        assert_eq!(builder.get_config(), &MatcherConfig::new(4, 1));

        let matcher = builder.build();
        assert!(matcher.validate(Some("123.4")).is_valid());
        assert_eq!(matcher.validate(Some("12.34")).len(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let matcher = DecimalMatcherBuilder::new().build();
        assert_eq!(matcher.config(), &MatcherConfig::default());
    }
}
