// ============================================================================
// Parsed Number
// A candidate value that parsed as a decimal, with precision introspection
// ============================================================================

use super::errors::{NumberError, NumberResult};
use rust_decimal::Decimal;
use std::fmt;

/// Largest scale `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Beyond this many padding zeros, `Display` switches to exponent notation.
const PLAIN_DISPLAY_LIMIT: i128 = 64;

/// A successfully parsed decimal candidate.
///
/// Keeps the coefficient digits and the scale exactly as written, with no
/// size limit, so trailing zeros survive parsing: `"1.50"` has 3 significant
/// digits and 2 decimal places.
///
/// # Accepted notation
/// - optional sign: `"-1.5"`, `"+2"`
/// - plain decimals, with either side of the point optional: `"5."`, `".5"`
/// - exponent notation: `"1.5e3"`, `"2E-4"`
///
/// Whitespace, digit-group separators, `NaN`/`Infinity` and radix prefixes
/// are rejected.
///
/// # Example
/// ```
/// use decimal_matcher::numeric::ParsedNumber;
///
/// let n = ParsedNumber::parse("123.450").unwrap();
/// assert_eq!(n.significant_digits(), 6);
/// assert_eq!(n.decimal_places(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ParsedNumber {
    negative: bool,
    /// Coefficient digits without leading zeros; empty for zero
    digits: String,
    /// Digits after the separator; negative when the exponent shifts past them
    scale: i128,
}

/// Lexical pieces of a decimal literal, before any numeric conversion.
struct Literal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl ParsedNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a candidate string.
    ///
    /// # Errors
    /// - `Empty` for an empty string
    /// - `InvalidSyntax` if the string is not a decimal literal
    pub fn parse(input: &str) -> NumberResult<Self> {
        let literal = scan(input)?;

        let mut digits: String = literal.integer.chars().chain(literal.fraction.chars()).collect();
        let leading_zeros = digits.bytes().take_while(|&b| b == b'0').count();
        digits.replace_range(..leading_zeros, "");

        let scale = literal.fraction.len() as i128 - i128::from(literal.exponent);

        Ok(Self {
            negative: literal.negative && !digits.is_empty(),
            digits,
            scale,
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits in the unscaled coefficient.
    ///
    /// Trailing zeros count, leading zeros do not. Zero reports 1. Saturates
    /// at `u32::MAX`.
    pub fn significant_digits(&self) -> u32 {
        if self.is_zero() {
            return 1;
        }
        let shifted = self.digits.len() as i128 + (-self.scale).max(0);
        u32::try_from(shifted).unwrap_or(u32::MAX)
    }

    /// Number of digits after the decimal separator, as written.
    ///
    /// Saturates at `u32::MAX`.
    pub fn decimal_places(&self) -> u32 {
        u32::try_from(self.scale.max(0)).unwrap_or(u32::MAX)
    }

    /// The value as a `rust_decimal::Decimal`, keeping the written scale.
    ///
    /// `None` when the value needs more than a 96-bit coefficient or 28
    /// decimal places. Validation never depends on this conversion.
    pub fn value(&self) -> Option<Decimal> {
        let places = self.decimal_places();
        if places > DECIMAL_MAX_SCALE {
            return None;
        }

        let mut coefficient: i128 = 0;
        for b in self.digits.bytes() {
            coefficient = coefficient
                .checked_mul(10)?
                .checked_add(i128::from(b - b'0'))?;
        }

        if self.scale < 0 && coefficient != 0 {
            // Positive exponent past the fraction shifts into the coefficient
            let shift = u32::try_from(-self.scale).ok()?;
            coefficient = coefficient.checked_mul(10_i128.checked_pow(shift)?)?;
        }

        if self.negative {
            coefficient = -coefficient;
        }

        Decimal::try_from_i128_with_scale(coefficient, places).ok()
    }
}

// ============================================================================
// Lexing
// ============================================================================

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Split `input` into sign, integer digits, fraction digits and exponent.
fn scan(input: &str) -> NumberResult<Literal<'_>> {
    if input.is_empty() {
        return Err(NumberError::Empty);
    }

    let (negative, body) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // A second separator stays in `fraction` and fails the digit check
    if integer.is_empty() && fraction.is_empty() {
        return Err(NumberError::InvalidSyntax);
    }
    if !all_digits(integer) || !all_digits(fraction) {
        return Err(NumberError::InvalidSyntax);
    }

    let exponent = match exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    Ok(Literal {
        negative,
        integer,
        fraction,
        exponent,
    })
}

/// Parse an exponent, saturating at the `i64` bounds.
fn parse_exponent(exp: &str) -> NumberResult<i64> {
    let (negative, digits) = if let Some(rest) = exp.strip_prefix('-') {
        (true, rest)
    } else {
        (false, exp.strip_prefix('+').unwrap_or(exp))
    };
    if digits.is_empty() || !all_digits(digits) {
        return Err(NumberError::InvalidSyntax);
    }
    Ok(exp
        .parse()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl std::str::FromStr for ParsedNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = if self.is_zero() { "0" } else { self.digits.as_str() };

        if self.scale.abs() > PLAIN_DISPLAY_LIMIT {
            return write!(f, "{digits}e{}", -self.scale);
        }

        if self.scale <= 0 {
            f.write_str(digits)?;
            if !self.is_zero() {
                for _ in 0..(-self.scale) {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }

        let places = self.scale as usize;
        if digits.len() > places {
            let (integer, fraction) = digits.split_at(digits.len() - places);
            write!(f, "{integer}.{fraction}")
        } else {
            write!(f, "0.{digits:0>places$}")
        }
    }
}

impl fmt::Debug for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedNumber({self})")
    }
}

// ============================================================================
// Tests
// ============================================================================
