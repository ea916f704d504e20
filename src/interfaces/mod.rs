// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod field_matcher;

pub use field_matcher::FieldMatcher;
