// ============================================================================
// Parsed Decimal
// Arbitrary-precision decimal literal with digit-count accessors
// ============================================================================

use super::errors::{NumericResult, ParseDecimalError};
use bigdecimal::BigDecimal;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Largest accepted exponent magnitude in `1e<exp>` notation.
pub const MAX_EXPONENT: i64 = 9_000_000_000_000_000;

/// Largest scale (and digit count) `rust_decimal::Decimal` can hold.
const DECIMAL_MAX_SCALE: u64 = 28;

/// Arbitrary-precision decimal number, normalised for digit counting.
///
/// Parsing is done by `bigdecimal`; the value is kept as its significant
/// digits (no leading or trailing zeros) and a scale, the power of ten the
/// last digit is divided by. A negative scale stands for integer trailing
/// zeros. There is no limit on how many digits a value can carry.
///
/// # Digit counting
/// - [`precision`](Self::precision): significant digits, integer trailing
///   zeros included (`"100"` -> 3, `"0.10"` -> 1, `"0"` -> 1)
/// - [`decimal_places`](Self::decimal_places): fractional digits after
///   normalisation (`"1.500"` -> 1, `"1.5e-3"` -> 4)
///
/// # Example
/// ```
/// use decimal_matcher::numeric::ParsedDecimal;
///
/// let x: ParsedDecimal = "-123.450".parse().unwrap();
/// assert_eq!(x.precision(), 5);
/// assert_eq!(x.decimal_places(), 2);
/// assert!(x.is_negative());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ParsedDecimal {
    negative: bool,
    /// ASCII digits, no leading or trailing zeros. Empty for zero.
    digits: String,
    scale: i64,
}

impl ParsedDecimal {
    /// Zero value
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: String::new(),
            scale: 0,
        }
    }

    /// Parse a decimal literal. Equivalent to `s.parse()`.
    ///
    /// # Errors
    /// Returns a [`ParseDecimalError`] describing why `s` is not a literal.
    pub fn parse(s: &str) -> NumericResult<Self> {
        s.parse()
    }

    /// Build from an unsigned run of ASCII digits divided by `10^scale`.
    fn from_coefficient(negative: bool, coefficient: &str, scale: i64) -> Self {
        let without_leading = coefficient.trim_start_matches('0');
        if without_leading.is_empty() {
            return Self::zero();
        }
        let digits = without_leading.trim_end_matches('0');
        let trailing_zeros = (without_leading.len() - digits.len()) as i64;

        Self {
            negative,
            digits: digits.to_string(),
            scale: scale - trailing_zeros,
        }
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        let (coefficient, scale) = value.normalized().as_bigint_and_exponent();
        let coefficient = coefficient.to_string();
        match coefficient.strip_prefix('-') {
            Some(magnitude) => Self::from_coefficient(true, magnitude, scale),
            None => Self::from_coefficient(false, &coefficient, scale),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check if value is strictly negative. Zero is never negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Significant digits without leading or trailing zeros (`"0"` for zero).
    pub fn significant_digits(&self) -> &str {
        if self.is_zero() {
            "0"
        } else {
            &self.digits
        }
    }

    /// Power of ten of the most significant digit.
    fn leading_exponent(&self) -> i64 {
        self.digits.len() as i64 - 1 - self.scale
    }

    /// Total significant digit count, sign and separator excluded.
    ///
    /// Trailing zeros of the integer part count; leading zeros and trailing
    /// fractional zeros do not.
    pub fn precision(&self) -> u64 {
        if self.is_zero() {
            return 1;
        }
        let len = self.digits.len() as u64;
        if self.scale < 0 {
            len + self.scale.unsigned_abs()
        } else {
            len
        }
    }

    /// Number of digits after the decimal separator.
    pub fn decimal_places(&self) -> u64 {
        self.scale.max(0) as u64
    }

    // ========================================================================
    // rust_decimal Interop
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 28 decimal places or
    /// exceeds the 96-bit mantissa.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let scale = self.decimal_places();
        let precision = self.precision();
        if scale > DECIMAL_MAX_SCALE || precision > DECIMAL_MAX_SCALE + 1 {
            return Err(ParseDecimalError::Overflow);
        }

        // Integer trailing zeros are implied by a negative scale
        let padding = precision - self.digits.len() as u64;
        let mut mantissa: i128 = 0;
        for d in self.digits.bytes() {
            mantissa = mantissa * 10 + i128::from(d - b'0');
        }
        for _ in 0..padding {
            mantissa *= 10;
        }
        if self.negative {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| ParseDecimalError::Overflow)
    }
}

impl From<Decimal> for ParsedDecimal {
    fn from(value: Decimal) -> Self {
        let coefficient = value.mantissa().unsigned_abs().to_string();
        Self::from_coefficient(
            value.is_sign_negative(),
            &coefficient,
            i64::from(value.scale()),
        )
    }
}

impl From<&Decimal> for ParsedDecimal {
    fn from(value: &Decimal) -> Self {
        Self::from(*value)
    }
}

impl From<&BigDecimal> for ParsedDecimal {
    fn from(value: &BigDecimal) -> Self {
        Self::from_big_decimal(value)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Reject the forms `BigDecimal::from_str` tolerates but a plain decimal
/// literal does not: digit group separators, whitespace, signs after the
/// first position, repeated exponent signs, exponents beyond `MAX_EXPONENT`.
fn check_literal(s: &str) -> NumericResult<()> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let exponent_at = bytes.iter().position(|b| matches!(b, b'e' | b'E'));
    let mantissa = &bytes[..exponent_at.unwrap_or(bytes.len())];

    let mut separators = 0;
    for (position, &b) in mantissa.iter().enumerate() {
        match b {
            b'0'..=b'9' => {},
            b'+' | b'-' if position == 0 => {},
            b'.' => separators += 1,
            _ => return Err(ParseDecimalError::InvalidCharacter { position }),
        }
    }
    if separators > 1 {
        return Err(ParseDecimalError::MultipleSeparators);
    }

    if let Some(at) = exponent_at {
        let start = at + 1 + usize::from(matches!(bytes.get(at + 1), Some(b'+' | b'-')));
        let digits = &bytes[start..];
        if digits.is_empty() {
            return Err(ParseDecimalError::InvalidExponent);
        }
        if let Some(i) = digits.iter().position(|b| !b.is_ascii_digit()) {
            return Err(ParseDecimalError::InvalidCharacter { position: start + i });
        }

        let significant = s[start..].trim_start_matches('0');
        let too_large = significant.len() > 16
            || significant
                .parse::<i64>()
                .map_or(false, |exponent| exponent > MAX_EXPONENT);
        if too_large {
            return Err(ParseDecimalError::ExponentOutOfRange);
        }
    }

    Ok(())
}

impl FromStr for ParsedDecimal {
    type Err = ParseDecimalError;

    /// Parse from a decimal literal. `.` is the only separator.
    ///
    /// # Examples
    /// - "123.45" -> 5 digits, 2 decimal places
    /// - "-.5" -> 1 digit, 1 decimal place
    /// - "1.2e3" -> 4 digits (1200), 0 decimal places
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_literal(s)?;
        let value = BigDecimal::from_str(s).map_err(|_| ParseDecimalError::Malformed)?;
        Ok(Self::from_big_decimal(&value))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ParsedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParsedDecimal({}, precision={}, dp={})",
            self,
            self.precision(),
            self.decimal_places()
        )
    }
}

impl fmt::Display for ParsedDecimal {
    /// Plain notation for exponents in `-7..21`, scientific otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }

        let digits = self.digits.as_str();
        let len = digits.len() as i64;
        let e = self.leading_exponent();

        if e <= -7 || e >= 21 {
            let (head, tail) = digits.split_at(1);
            if tail.is_empty() {
                write!(f, "{}e{:+}", head, e)
            } else {
                write!(f, "{}.{}e{:+}", head, tail, e)
            }
        } else if e < 0 {
            write!(f, "0.{:0>width$}", digits, width = (len - e - 1) as usize)
        } else if e + 1 >= len {
            write!(f, "{:0<width$}", digits, width = (e + 1) as usize)
        } else {
            let (int_part, frac_part) = digits.split_at((e + 1) as usize);
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pd(s: &str) -> ParsedDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_precision_counts_integer_and_fraction() {
        assert_eq!(pd("123.45").precision(), 5);
        assert_eq!(pd("12345678901").precision(), 11);
        assert_eq!(pd("-123456").precision(), 6);
        assert_eq!(pd("+7").precision(), 1);
    }

    #[test]
    fn test_precision_zero_handling() {
        assert_eq!(pd("0").precision(), 1);
        assert_eq!(pd("0.000").precision(), 1);
        assert_eq!(pd("100").precision(), 3);
        assert_eq!(pd("00123").precision(), 3);
        assert_eq!(pd("0.10").precision(), 1);
        assert_eq!(pd("0.001").precision(), 1);
        assert_eq!(pd("1.500").precision(), 2);
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(pd("123.45").decimal_places(), 2);
        assert_eq!(pd("123.456").decimal_places(), 3);
        assert_eq!(pd("100").decimal_places(), 0);
        assert_eq!(pd("0.10").decimal_places(), 1);
        assert_eq!(pd("1.").decimal_places(), 0);
        assert_eq!(pd(".25").decimal_places(), 2);
        assert_eq!(pd("-.5").decimal_places(), 1);
        assert_eq!(pd("0").decimal_places(), 0);
    }

    #[test]
    fn test_exponent_notation() {
        let x = pd("1e5");
        assert_eq!(x.precision(), 6);
        assert_eq!(x.decimal_places(), 0);

        let y = pd("1.5E-3");
        assert_eq!(y.precision(), 2);
        assert_eq!(y.decimal_places(), 4);

        let z = pd("12.34e+1");
        assert_eq!(z.precision(), 4);
        assert_eq!(z.decimal_places(), 1);
    }

    #[test]
    fn test_exponent_limit() {
        let at_limit = pd("1e9000000000000000");
        assert_eq!(at_limit.precision(), 9_000_000_000_000_001);
        assert_eq!(at_limit.decimal_places(), 0);

        let negative_limit = pd("1e-9000000000000000");
        assert_eq!(negative_limit.precision(), 1);
        assert_eq!(negative_limit.decimal_places(), 9_000_000_000_000_000);

        // Leading zeros in the exponent do not count towards the limit
        assert_eq!(pd("1e0009000000000000000"), at_limit);
    }

    #[test]
    fn test_exponent_beyond_limit() {
        assert_eq!(
            ParsedDecimal::parse("1e9000000000000001"),
            Err(ParseDecimalError::ExponentOutOfRange)
        );
        assert_eq!(
            ParsedDecimal::parse("1e-9000000000000001"),
            Err(ParseDecimalError::ExponentOutOfRange)
        );
        assert_eq!(
            ParsedDecimal::parse("1e99999999999999999"),
            Err(ParseDecimalError::ExponentOutOfRange)
        );
    }

    #[test]
    fn test_arbitrary_precision() {
        let long = "1234567890123456789012345678901234567890.0123456789";
        let x = pd(long);
        assert_eq!(x.precision(), 50);
        assert_eq!(x.decimal_places(), 10);
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(ParsedDecimal::parse(""), Err(ParseDecimalError::Empty));
        assert_eq!(
            ParsedDecimal::parse("abc"),
            Err(ParseDecimalError::InvalidCharacter { position: 0 })
        );
        assert_eq!(
            ParsedDecimal::parse("1.2.3"),
            Err(ParseDecimalError::MultipleSeparators)
        );
        assert_eq!(
            ParsedDecimal::parse("1,5"),
            Err(ParseDecimalError::InvalidCharacter { position: 1 })
        );
        assert_eq!(ParsedDecimal::parse("-"), Err(ParseDecimalError::Malformed));
        assert_eq!(ParsedDecimal::parse("."), Err(ParseDecimalError::Malformed));
        assert_eq!(ParsedDecimal::parse("e5"), Err(ParseDecimalError::Malformed));
        assert_eq!(ParsedDecimal::parse("1e"), Err(ParseDecimalError::InvalidExponent));
        assert_eq!(
            ParsedDecimal::parse("1e+"),
            Err(ParseDecimalError::InvalidExponent)
        );
        assert_eq!(
            ParsedDecimal::parse("1e5.0"),
            Err(ParseDecimalError::InvalidCharacter { position: 3 })
        );
        assert_eq!(
            ParsedDecimal::parse("1e++5"),
            Err(ParseDecimalError::InvalidCharacter { position: 3 })
        );
    }

    #[test]
    fn test_rejects_non_literals() {
        for input in [
            " 1", "1 ", "NaN", "Infinity", "-Infinity", "0x1F", "1_000", "--1", "+-1", ".+5",
            "1e5e3",
        ] {
            assert!(ParsedDecimal::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_sign() {
        assert!(pd("-1.5").is_negative());
        assert!(!pd("+1.5").is_negative());
        assert!(!pd("-0.0").is_negative());
        assert!(pd("-0.0").is_zero());
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(pd("-0012.3400").significant_digits(), "1234");
        assert_eq!(pd("1.5e7").significant_digits(), "15");
        assert_eq!(pd("0.000").significant_digits(), "0");
    }

    #[test]
    fn test_normalised_equality() {
        assert_eq!(pd("1.50"), pd("1.5"));
        assert_eq!(pd("0015"), pd("15"));
        assert_eq!(pd("1.5e1"), pd("15"));
        assert_ne!(pd("1.5"), pd("-1.5"));
    }

    #[test]
    fn test_display() {
        assert_eq!(pd("123.450").to_string(), "123.45");
        assert_eq!(pd("-0.001").to_string(), "-0.001");
        assert_eq!(pd("1e5").to_string(), "100000");
        assert_eq!(pd("000").to_string(), "0");
        assert_eq!(pd("1.5e-10").to_string(), "1.5e-10");
        assert_eq!(pd("12e30").to_string(), "1.2e+31");
    }

    #[test]
    fn test_to_decimal() {
        let d = pd("123.45").to_decimal().unwrap();
        assert_eq!(d, Decimal::new(12345, 2));

        let big = pd("1e5").to_decimal().unwrap();
        assert_eq!(big, Decimal::from(100_000));

        let neg = pd("-0.001").to_decimal().unwrap();
        assert_eq!(neg, Decimal::new(-1, 3));

        assert_eq!(pd("0").to_decimal().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_to_decimal_overflow() {
        assert_eq!(
            pd("1e40").to_decimal(),
            Err(ParseDecimalError::Overflow)
        );
        assert_eq!(
            pd("1e-30").to_decimal(),
            Err(ParseDecimalError::Overflow)
        );
    }

    #[test]
    fn test_from_decimal() {
        let x = ParsedDecimal::from(Decimal::new(12345, 2)); // 123.45
        assert_eq!(x.precision(), 5);
        assert_eq!(x.decimal_places(), 2);

        // Trailing fractional zeros in the scale are not significant
        let y = ParsedDecimal::from(Decimal::new(1500, 3)); // 1.500
        assert_eq!(y, pd("1.5"));

        let z = ParsedDecimal::from(Decimal::new(-1, 3));
        assert_eq!(z, pd("-0.001"));

        assert!(ParsedDecimal::from(Decimal::ZERO).is_zero());
    }

    #[test]
    fn test_from_big_decimal() {
        let value = BigDecimal::from_str("-1200.0500").unwrap();
        let x = ParsedDecimal::from(&value);
        assert_eq!(x, pd("-1200.05"));
        assert_eq!(x.precision(), 6);
        assert_eq!(x.decimal_places(), 2);
    }
}
