// ============================================================================
// Field Matcher Interface
// Defines the contract a field-validation pipeline drives matchers through
// ============================================================================

use crate::domain::ValidationOutcome;

/// Strategy pattern interface for field matchers
///
/// A matcher is configured once and then validates any number of candidate
/// values. Implementations must be pure: the outcome depends only on the
/// value and the fixed configuration, never on earlier calls.
pub trait FieldMatcher: Send + Sync {
    /// Validate a candidate value
    ///
    /// # Arguments
    /// * `value` - The candidate, or `None` when no value was supplied
    ///
    /// # Returns
    /// A fresh outcome holding every violation found
    fn validate(&self, value: Option<&str>) -> ValidationOutcome;

    /// Get the matcher name for logging/reporting
    fn name(&self) -> &str;

    /// Batch validation (one outcome per value, in order)
    fn validate_all<'a, I>(&self, values: I) -> Vec<ValidationOutcome>
    where
        I: IntoIterator<Item = Option<&'a str>>,
        Self: Sized,
    {
        values.into_iter().map(|value| self.validate(value)).collect()
    }
}
