// ============================================================================
// Domain Models Module
// Contains configuration and validation result value objects
// ============================================================================

pub mod matcher_config;
pub mod outcome;

pub use matcher_config::{ConfigError, MatcherConfig, DEFAULT_MAX_DIGITS};
pub use outcome::{ErrorKind, ErrorRecord, ValidationOutcome};
