// ============================================================================
// Decimal Matcher
// Validates that a field value is a decimal within precision thresholds
// ============================================================================

use crate::domain::{ConfigError, ErrorKind, MatcherConfig, ValidationOutcome};
use crate::interfaces::FieldMatcher;
use crate::numeric::ParsedNumber;

/// Name reported through `FieldMatcher::name`
const MATCHER_NAME: &str = "decimalNumber";

/// Decimal number matcher
///
/// Checks, in order:
/// 1. the value parses as a decimal (`doubleNumber.e001`, stops here on failure)
/// 2. significant digits do not exceed `max_digits` (`doubleNumber.e002`)
/// 3. decimal places do not exceed `max_decimal_places`, when configured
///    (`doubleNumber.e003`)
///
/// An absent value is valid. The matcher holds only its configuration, so one
/// instance can be shared across threads.
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalMatcher::new(MatcherConfig::new(3, 1));
/// let outcome = matcher.validate(Some("12.34"));
///
/// assert_eq!(
///     outcome.codes().collect::<Vec<_>>(),
///     vec!["doubleNumber.e002", "doubleNumber.e003"]
/// );
/// assert!(matcher.validate(None).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalMatcher {
    config: MatcherConfig,
}

impl DecimalMatcher {
    /// Create a new decimal matcher
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create from the positional 0/1/2 threshold form
    pub fn from_thresholds(thresholds: &[u32]) -> Result<Self, ConfigError> {
        MatcherConfig::from_thresholds(thresholds).map(Self::new)
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Validate a candidate value, returning a fresh outcome.
    pub fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        let Some(value) = value else {
            return outcome;
        };

        let number = match ParsedNumber::parse(value) {
            Ok(number) => number,
            Err(err) => {
                tracing::trace!(value, %err, "decimal conversion failed");
                outcome.push(ErrorKind::ConversionFailure);
                return outcome;
            }
        };

        self.check_digits(&number, &mut outcome);
        self.check_decimal_places(&number, &mut outcome);

        outcome
    }

    fn check_digits(&self, number: &ParsedNumber, outcome: &mut ValidationOutcome) {
        let digits = number.significant_digits();
        if digits > self.config.max_digits {
            tracing::trace!(
                digits,
                max_digits = self.config.max_digits,
                "decimal exceeds digit threshold"
            );
            outcome.push(ErrorKind::TooManyDigits);
        }
    }

    fn check_decimal_places(&self, number: &ParsedNumber, outcome: &mut ValidationOutcome) {
        let Some(max_decimal_places) = self.config.max_decimal_places else {
            return;
        };

        let places = number.decimal_places();
        if places > max_decimal_places {
            tracing::trace!(
                places,
                max_decimal_places,
                "decimal exceeds decimal-place threshold"
            );
            outcome.push(ErrorKind::TooManyDecimalPlaces);
        }
    }
}

impl FieldMatcher for DecimalMatcher {
    fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        DecimalMatcher::validate(self, value)
    }

    fn name(&self) -> &str {
        MATCHER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn codes(outcome: &ValidationOutcome) -> Vec<&str> {
        outcome.codes().collect()
    }

    fn matcher(thresholds: &[u32]) -> DecimalMatcher {
        DecimalMatcher::from_thresholds(thresholds).unwrap()
    }

    #[test]
    fn test_none_is_valid() {
        let cases: [&[u32]; 3] = [&[], &[3], &[3, 0]];
        for thresholds in cases {
            let outcome = matcher(thresholds).validate(None);
            assert!(outcome.is_valid());
            assert!(outcome.errors().is_empty());
        }
    }

    #[test]
    fn test_conversion_failure_is_alone() {
        let cases: [&[u32]; 3] = [&[], &[1], &[1, 0]];
        for thresholds in cases {
            for value in ["abc", "", "1.2.3"] {
                let outcome = matcher(thresholds).validate(Some(value));
                assert_eq!(codes(&outcome), vec!["doubleNumber.e001"], "value {value:?}");
                assert_eq!(
                    outcome.errors()[0].message(),
                    "The value is not a valid decimal number."
                );
            }
        }
    }

    #[test]
    fn test_default_digit_threshold() {
        let m = DecimalMatcher::default();
        assert!(m.validate(Some("12345678901")).is_valid());

        let outcome = m.validate(Some("123456789012"));
        assert_eq!(codes(&outcome), vec!["doubleNumber.e002"]);
        assert_eq!(
            outcome.errors()[0].message(),
            "The value exceeded maximum number of digits."
        );
    }

    #[test]
    fn test_default_ignores_decimal_places() {
        let m = matcher(&[]);
        assert!(m.validate(Some("0.1234567891")).is_valid());
    }

    #[test]
    fn test_two_thresholds() {
        let m = matcher(&[5, 2]);
        assert!(m.validate(Some("123.45")).is_valid());
        assert!(m.validate(Some("1234.5")).is_valid());
        assert_eq!(codes(&m.validate(Some("12345.6"))), vec!["doubleNumber.e002"]);

        let outcome = m.validate(Some("1.234"));
        assert_eq!(codes(&outcome), vec!["doubleNumber.e003"]);
        assert_eq!(
            outcome.errors()[0].message(),
            "The value exceeded maximum number of decimal places."
        );
    }

    #[test]
    fn test_both_violations_in_order() {
        let outcome = matcher(&[3, 1]).validate(Some("12.34"));
        assert_eq!(
            codes(&outcome),
            vec!["doubleNumber.e002", "doubleNumber.e003"]
        );
    }

    #[test]
    fn test_digit_threshold_is_inclusive() {
        // 4 digits against a limit of 4 only trips the decimal-place check
        let outcome = matcher(&[4, 1]).validate(Some("12.34"));
        assert_eq!(codes(&outcome), vec!["doubleNumber.e003"]);
    }

    #[test]
    fn test_trailing_zeros_count_toward_both_checks() {
        let m = matcher(&[2, 1]);
        assert_eq!(
            codes(&m.validate(Some("1.50"))),
            vec!["doubleNumber.e002", "doubleNumber.e003"]
        );
        assert!(m.validate(Some("1.5")).is_valid());
    }

    #[test]
    fn test_one_threshold_never_checks_decimal_places() {
        let m = matcher(&[30]);
        assert!(m.validate(Some("0.1234567890123456789012345678")).is_valid());

        let m = matcher(&[3]);
        assert_eq!(codes(&m.validate(Some("1.234"))), vec!["doubleNumber.e002"]);
    }

    #[test]
    fn test_zero_decimal_places_threshold() {
        let m = matcher(&[11, 0]);
        assert!(m.validate(Some("42")).is_valid());
        assert_eq!(codes(&m.validate(Some("42.0"))), vec!["doubleNumber.e003"]);
    }

    #[test]
    fn test_negative_and_exponent_values() {
        let m = matcher(&[5, 2]);
        assert!(m.validate(Some("-123.45")).is_valid());
        assert!(m.validate(Some("1.5e2")).is_valid());
        assert_eq!(codes(&m.validate(Some("1.5e-3"))), vec!["doubleNumber.e003"]);
    }

    #[test]
    fn test_values_beyond_fixed_precision_report_real_violation() {
        let default = matcher(&[]);
        assert_eq!(
            codes(&default.validate(Some(&"9".repeat(40)))),
            vec!["doubleNumber.e002"]
        );
        assert_eq!(
            codes(&default.validate(Some("1234567890123456789012345678901"))),
            vec!["doubleNumber.e002"]
        );
        assert_eq!(codes(&default.validate(Some("1e30"))), vec!["doubleNumber.e002"]);

        let thirty_places = format!("0.{}1", "0".repeat(29));
        assert_eq!(
            codes(&matcher(&[5, 2]).validate(Some(&thirty_places))),
            vec!["doubleNumber.e003"]
        );

        assert!(matcher(&[40]).validate(Some(&"9".repeat(40))).is_valid());
    }

    #[test]
    fn test_no_cross_call_accumulation() {
        let m = matcher(&[3, 1]);
        let first = m.validate(Some("12.34"));
        let second = m.validate(Some("12.34"));
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);

        assert!(m.validate(Some("1.2")).is_valid());
    }

    #[test]
    fn test_field_matcher_trait() {
        let m: Box<dyn FieldMatcher> = Box::new(matcher(&[5, 2]));
        assert_eq!(m.name(), "decimalNumber");
        assert!(m.validate(Some("1.25")).is_valid());
    }

    #[test]
    fn test_validate_all() {
        let outcomes = matcher(&[5, 2]).validate_all([None, Some("x"), Some("1.234"), Some("1")]);
        let all: Vec<Vec<&str>> = outcomes.iter().map(codes).collect();
        assert_eq!(
            all,
            vec![
                vec![],
                vec!["doubleNumber.e001"],
                vec!["doubleNumber.e003"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let m = Arc::new(matcher(&[3, 1]));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let m = Arc::clone(&m);
                thread::spawn(move || {
                    let value = if i % 2 == 0 { "12.34" } else { "1.5" };
                    (0..100)
                        .map(|_| m.validate(Some(value)).len())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let lens = handle.join().unwrap();
            let expected = if i % 2 == 0 { 2 } else { 0 };
            assert!(lens.iter().all(|&len| len == expected));
        }
    }

    #[test]
    fn test_config_accessor() {
        let m = DecimalMatcher::new(MatcherConfig::new(7, 3));
        assert_eq!(m.config().max_digits, 7);
        assert_eq!(m.config().max_decimal_places, Some(3));
    }
}
