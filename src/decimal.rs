//! Exact decimal fractions (RFC 8949 section 3.4.4)
//!
//! A [`Decimal`] denotes `mantissa × 10^exponent`. It is carried through
//! resolution untouched so that values such as `271.15` survive a CBOR round
//! trip without binary floating-point error.

use std::fmt;
use std::str::FromStr;

use crate::SenMLError;

/// A decimal fraction `mantissa × 10^exponent`
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    exponent: i64,
    mantissa: i64,
}

impl Decimal {
    /// Create a decimal fraction from its exponent and mantissa
    pub const fn new(exponent: i64, mantissa: i64) -> Self {
        Self { exponent, mantissa }
    }

    /// Base-10 exponent
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Integer mantissa
    pub const fn mantissa(&self) -> i64 {
        self.mantissa
    }

    /// Floating point approximation; large mantissas lose precision.
    pub fn to_f64(&self) -> f64 {
        let power = i32::try_from(self.exponent.unsigned_abs()).unwrap_or(i32::MAX);
        let scale = 10f64.powi(power);
        if self.exponent < 0 {
            self.mantissa as f64 / scale
        } else {
            self.mantissa as f64 * scale
        }
    }

    /// Integer part, truncated toward zero. Saturates when the value exceeds `i64`.
    pub fn to_i64(&self) -> i64 {
        if self.exponent < 0 {
            match pow10(self.exponent.unsigned_abs()) {
                Some(divisor) => self.mantissa / divisor,
                None => 0,
            }
        } else {
            match pow10(self.exponent.unsigned_abs()) {
                Some(factor) => self.mantissa.saturating_mul(factor),
                None if self.mantissa == 0 => 0,
                None if self.mantissa > 0 => i64::MAX,
                None => i64::MIN,
            }
        }
    }

    /// Integer part as `u64`, truncated toward zero. Negative values wrap like
    /// `to_i64() as u64`; values beyond `u64` saturate.
    pub fn to_u64(&self) -> u64 {
        if self.mantissa < 0 {
            return self.to_i64() as u64;
        }
        let mantissa = self.mantissa.unsigned_abs();
        let power = u32::try_from(self.exponent.unsigned_abs())
            .ok()
            .and_then(|exp| 10u64.checked_pow(exp));
        match power {
            Some(divisor) if self.exponent < 0 => mantissa / divisor,
            None if self.exponent < 0 => 0,
            Some(factor) => mantissa.saturating_mul(factor),
            None if mantissa == 0 => 0,
            None => u64::MAX,
        }
    }
}

/// `10^exp` when it fits in an `i64`
fn pow10(exp: u64) -> Option<i64> {
    u32::try_from(exp).ok().and_then(|exp| 10i64.checked_pow(exp))
}

/// Multiply `mantissa` by `10^exp`, `None` on overflow
fn scale_up(mantissa: i64, exp: u64) -> Option<i64> {
    if mantissa == 0 {
        return Some(0);
    }
    pow10(exp)?.checked_mul(mantissa)
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let (high, low) = if self.exponent > other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        // An overflowing mantissa is outside i64 and cannot match the other side.
        scale_up(high.mantissa, high.exponent.abs_diff(low.exponent))
            .is_some_and(|scaled| scaled == low.mantissa)
    }
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.mantissa, self.exponent)
    }
}

/// Parses the `<mantissa>e<exponent>` form written by `Display`.
impl FromStr for Decimal {
    type Err = SenMLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SenMLError::invalid_decimal(format!("expected <mantissa>e<exponent>, got {s:?}"));
        let (mantissa, exponent) = s.split_once(['e', 'E']).ok_or_else(invalid)?;
        Ok(Decimal::new(
            exponent.parse().map_err(|_| invalid())?,
            mantissa.parse().map_err(|_| invalid())?,
        ))
    }
}

#[cfg(feature = "cbor")]
mod cbor_ext {
    use super::Decimal;
    use crate::cbor::CborExtension;
    use crate::{Result, SenMLError};
    use ciborium::value::Value;

    impl CborExtension for Decimal {
        const TAG: u64 = 4;

        fn encode_content(&self) -> Value {
            Value::Array(vec![
                Value::Integer(self.exponent.into()),
                Value::Integer(self.mantissa.into()),
            ])
        }

        fn decode_content(content: Value) -> Result<Self> {
            let Value::Array(items) = content else {
                return Err(SenMLError::invalid_decimal(
                    "expected an array of [exponent, mantissa]",
                ));
            };
            let [exponent, mantissa]: [Value; 2] = items.try_into().map_err(|items: Vec<Value>| {
                SenMLError::invalid_decimal(format!("expected 2 elements, got {}", items.len()))
            })?;
            Ok(Decimal::new(
                integer_part(exponent, "exponent")?,
                integer_part(mantissa, "mantissa")?,
            ))
        }
    }

    fn integer_part(value: Value, part: &str) -> Result<i64> {
        match value {
            Value::Integer(i) => i64::try_from(i)
                .map_err(|_| SenMLError::invalid_decimal(format!("{part} out of range"))),
            other => Err(SenMLError::invalid_decimal(format!(
                "{part} must be an integer, got {other:?}"
            ))),
        }
    }
}
