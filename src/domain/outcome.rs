// ============================================================================
// Validation Outcome
// Error catalog, error records, and the per-call result container
// ============================================================================

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Error Catalog
// ============================================================================

/// The fixed catalog of decimal validation errors.
///
/// Codes are stable and part of the public interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// The value is not a parsable decimal
    ConversionFailure,
    /// Significant digit count exceeds the digit threshold
    TooManyDigits,
    /// Decimal-place count exceeds the decimal-place threshold
    TooManyDecimalPlaces,
}

impl ErrorKind {
    /// Stable error code
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::ConversionFailure => "doubleNumber.e001",
            ErrorKind::TooManyDigits => "doubleNumber.e002",
            ErrorKind::TooManyDecimalPlaces => "doubleNumber.e003",
        }
    }

    /// End-user message
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::ConversionFailure => "The value is not a valid decimal number.",
            ErrorKind::TooManyDigits => "The value exceeded maximum number of digits.",
            ErrorKind::TooManyDecimalPlaces => {
                "The value exceeded maximum number of decimal places."
            }
        }
    }

    /// Look up a catalog entry by its code
    pub fn from_code(code: &str) -> Option<Self> {
        [
            ErrorKind::ConversionFailure,
            ErrorKind::TooManyDigits,
            ErrorKind::TooManyDecimalPlaces,
        ]
        .into_iter()
        .find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Error Record
// ============================================================================

/// A single validation error: a code and an end-user message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorRecord {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl ErrorRecord {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Record for a catalog entry
    pub const fn from_kind(kind: ErrorKind) -> Self {
        Self {
            code: Cow::Borrowed(kind.code()),
            message: Cow::Borrowed(kind.message()),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Catalog entry this record belongs to, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(&self.code)
    }
}

impl From<ErrorKind> for ErrorRecord {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ============================================================================
// Validation Outcome
// ============================================================================

/// Ordered, append-only collection of error records for one validation call.
///
/// Valid iff empty. A decimal validation produces at most two records, so
/// they are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationOutcome {
    errors: SmallVec<[ErrorRecord; 2]>,
}

impl ValidationOutcome {
    /// Empty, valid outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error given its code and message
    pub fn add_error(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.errors.push(ErrorRecord::new(code, message));
    }

    /// Append a catalog error
    pub fn push(&mut self, kind: ErrorKind) {
        self.errors.push(ErrorRecord::from_kind(kind));
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in the order they were appended
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Codes in the order they were appended
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(ErrorRecord::code)
    }

    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.codes().any(|code| code == kind.code())
    }

    /// `Ok(())` when valid, otherwise the outcome itself as the error
    pub fn into_result(self) -> Result<(), ValidationOutcome> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = ErrorRecord;
    type IntoIter = smallvec::IntoIter<[ErrorRecord; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a ErrorRecord;
    type IntoIter = std::slice::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
