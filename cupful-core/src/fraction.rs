//! Reduced fractions for human display
//!
//! Built on dashu-ratio's RBig, which keeps numerator and denominator in
//! lowest terms. Floats are first rounded to a bounded number of decimal
//! digits so that binary noise (0.1 printing as 0.1000000000000000055...)
//! never leaks into the denominator.

use std::fmt;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Serialize, Serializer};
use crate::ConversionError;

/// Default number of decimal digits kept before reducing
pub const DEFAULT_FRACTION_DIGITS: u32 = 6;

/// Largest supported digit count; f64 carries ~15 significant decimal digits
pub const MAX_FRACTION_DIGITS: u32 = 15;

/// A fraction `p/q` in lowest terms with `q > 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    inner: RBig,
}

impl Fraction {
    /// Create from integer parts, reducing. Returns None for a zero denominator.
    pub fn new(numerator: i64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Fraction {
            inner: RBig::from_parts(IBig::from(numerator), UBig::from(denominator)),
        })
    }

    /// Approximate a float by rounding to `digits` decimal places and reducing
    pub fn from_f64(value: f64, digits: u32) -> Result<Self, ConversionError> {
        check_digits(digits)?;
        if !value.is_finite() {
            return Err(ConversionError::InvalidAmount { amount: value });
        }

        let scale = 10u64.pow(digits);
        let shifted = (value * scale as f64).round();
        if shifted.abs() >= i128::MAX as f64 {
            return Err(ConversionError::InvalidAmount { amount: value });
        }

        Ok(Fraction {
            inner: RBig::from_parts(IBig::from(shifted as i128), UBig::from(scale)),
        })
    }

    /// True when the value rounded to zero
    pub fn is_zero(&self) -> bool {
        *self.inner.numerator() == IBig::ZERO
    }

    pub fn numerator(&self) -> &IBig {
        self.inner.numerator()
    }

    pub fn denominator(&self) -> &UBig {
        self.inner.denominator()
    }

    /// Inner exact rational
    pub fn as_rational(&self) -> &RBig {
        &self.inner
    }
}

/// Validate a fraction digit count
pub fn check_digits(digits: u32) -> Result<(), ConversionError> {
    if digits == 0 || digits > MAX_FRACTION_DIGITS {
        return Err(ConversionError::InvalidPrecision {
            digits,
            max: MAX_FRACTION_DIGITS,
        });
    }
    Ok(())
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64) -> String {
        Fraction::from_f64(value, DEFAULT_FRACTION_DIGITS).unwrap().to_string()
    }

    #[test]
    fn test_reduces_to_lowest_terms() {
        assert_eq!(render(0.125), "1/8");
        assert_eq!(render(0.75), "3/4");
        assert_eq!(render(2.5), "5/2");
        assert_eq!(render(0.1), "1/10");
    }

    #[test]
    fn test_negative() {
        assert_eq!(render(-0.5), "-1/2");
    }

    #[test]
    fn test_whole_number_keeps_denominator() {
        assert_eq!(render(3.0), "3/1");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        // 0.1 + 0.2 == 0.30000000000000004
        assert_eq!(render(0.1 + 0.2), "3/10");
    }

    #[test]
    fn test_precision_bounds_denominator() {
        let third = 1.0 / 3.0;
        assert_eq!(render(third), "333333/1000000");
        assert_eq!(Fraction::from_f64(third, 2).unwrap().to_string(), "33/100");
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            Fraction::from_f64(0.5, 0),
            Err(ConversionError::InvalidPrecision { digits: 0, max: MAX_FRACTION_DIGITS })
        );
        assert!(Fraction::from_f64(0.5, 16).is_err());
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            Fraction::from_f64(f64::INFINITY, 6),
            Err(ConversionError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_rounds_to_zero() {
        let tiny = Fraction::from_f64(0.0000001, 6).unwrap();
        assert!(tiny.is_zero());
        assert_eq!(tiny.to_string(), "0/1");
        assert!(!Fraction::from_f64(0.000001, 6).unwrap().is_zero());
    }

    #[test]
    fn test_new() {
        assert_eq!(Fraction::new(6, 8).unwrap().to_string(), "3/4");
        assert!(Fraction::new(1, 0).is_none());
    }

    #[test]
    fn test_serializes_as_string() {
        let f = Fraction::new(1, 4).unwrap();
        assert_eq!(serde_json::to_string(&f).unwrap(), "\"1/4\"");
    }
}
