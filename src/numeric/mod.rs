// ============================================================================
// Numeric Module
// Parsing and introspection of candidate decimal values
// ============================================================================
//
// This module provides:
// - ParsedNumber: a successfully parsed candidate backed by rust_decimal
// - NumberError: typed parse failures
//
// Design principles:
// - Parsing returns Result (no panics, no unwinding)
// - The scale written by the caller is preserved ("1.50" keeps 2 places)
// - No arithmetic beyond introspection

mod errors;
mod parsed_number;

pub use errors::{NumberError, NumberResult};
pub use parsed_number::ParsedNumber;
