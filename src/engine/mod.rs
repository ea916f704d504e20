// ============================================================================
// Engine Module
// Contains the matcher validation logic and its construction helpers
// ============================================================================

mod decimal_matcher;

pub mod factory;

pub use decimal_matcher::DecimalMatcher;
pub use factory::{create_from_config, create_from_thresholds, DecimalMatcherBuilder};
