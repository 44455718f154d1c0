//! Polymorphic numeric values
//!
//! Every numeric SenML field (`bt`, `bv`, `bs`, `v`, `s`, `t`, `ut`) is carried
//! as a [`Numeric`] rather than a plain `f64`, so that integers stay integers
//! and decimal fractions stay exact across a decode/encode cycle.

use std::fmt;
use std::ops::Add;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use time::{Duration, OffsetDateTime};

use crate::decimal::Decimal;
use crate::timestamp;

/// A numeric wire value, or its absence
#[derive(Debug, Clone, Copy, Default)]
pub enum Numeric {
    /// Field not present on the wire
    #[default]
    Absent,
    /// Signed 64-bit integer
    Int(i64),
    /// Unsigned 64-bit integer
    Uint(u64),
    /// 64-bit floating point
    Float(f64),
    /// Exact decimal fraction
    Decimal(Decimal),
}

impl Numeric {
    /// Returns `true` for [`Numeric::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Numeric::Absent)
    }

    /// Returns `true` when the field carries a value
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Convert to `i64`, truncating any fractional part. Absent is 0.
    pub fn to_i64(&self) -> i64 {
        match *self {
            Numeric::Absent => 0,
            Numeric::Int(i) => i,
            Numeric::Uint(u) => u as i64,
            Numeric::Float(f) => f as i64,
            Numeric::Decimal(d) => d.to_i64(),
        }
    }

    /// Convert to `u64`, truncating fractions. Negative values wrap as two's complement.
    pub fn to_u64(&self) -> u64 {
        match *self {
            Numeric::Absent => 0,
            Numeric::Int(i) => i as u64,
            Numeric::Uint(u) => u,
            Numeric::Float(f) if f >= 0.0 => f as u64,
            Numeric::Float(f) => (f as i64) as u64,
            Numeric::Decimal(d) => d.to_u64(),
        }
    }

    /// Convert to `f64`. Integers beyond 2^53 lose precision.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Numeric::Absent => 0.0,
            Numeric::Int(i) => i as f64,
            Numeric::Uint(u) => u as f64,
            Numeric::Float(f) => f,
            Numeric::Decimal(d) => d.to_f64(),
        }
    }

    /// Interpret as a signed number of seconds
    pub fn to_duration(&self) -> Duration {
        timestamp::numeric_to_duration(self)
    }

    /// Interpret as seconds since the Unix epoch; `None` when absent
    pub fn to_timestamp(&self) -> Option<OffsetDateTime> {
        timestamp::numeric_to_timestamp(self)
    }

    fn is_integer(&self) -> bool {
        matches!(self, Numeric::Int(_) | Numeric::Uint(_))
    }
}

/// Absent-absorbing sum. Integer operands stay integral (signed unless both
/// are unsigned, wrapping on overflow); a float or decimal operand makes the
/// result a float.
impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        match (self, rhs) {
            (Numeric::Absent, b) => b,
            (a, Numeric::Absent) => a,
            (Numeric::Uint(a), Numeric::Uint(b)) => Numeric::Uint(a.wrapping_add(b)),
            (a, b) if a.is_integer() && b.is_integer() => {
                Numeric::Int(a.to_i64().wrapping_add(b.to_i64()))
            }
            (a, b) => Numeric::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Numeric::Absent, Numeric::Absent) => true,
            (Numeric::Absent, _) | (_, Numeric::Absent) => false,
            (Numeric::Int(a), Numeric::Int(b)) => a == b,
            (Numeric::Uint(a), Numeric::Uint(b)) => a == b,
            (Numeric::Int(i), Numeric::Uint(u)) | (Numeric::Uint(u), Numeric::Int(i)) => {
                i64::try_from(u).is_ok_and(|u| u == i)
            }
            (Numeric::Decimal(a), Numeric::Decimal(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric::Uint(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Decimal(value)
    }
}

impl<T: Into<Numeric>> From<Option<T>> for Numeric {
    fn from(value: Option<T>) -> Self {
        value.map_or(Numeric::Absent, Into::into)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Absent => Ok(()),
            Numeric::Int(i) => write!(f, "{i}"),
            Numeric::Uint(u) => write!(f, "{u}"),
            Numeric::Float(v) => write!(f, "{v}"),
            Numeric::Decimal(d) => write!(f, "{d}"),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Numeric::Absent => serializer.serialize_none(),
            Numeric::Int(i) => serializer.serialize_i64(i),
            Numeric::Uint(u) => serializer.serialize_u64(u),
            Numeric::Float(v) if serializer.is_human_readable() => serialize_finite(v, serializer),
            Numeric::Float(v) => serializer.serialize_f64(v),
            // Text formats have no decimal fraction type.
            Numeric::Decimal(d) if serializer.is_human_readable() => {
                serialize_finite(d.to_f64(), serializer)
            }
            Numeric::Decimal(d) => Err(ser::Error::custom(format_args!(
                "decimal fraction {d} needs CBOR tag 4, encode records with cbor::records_to_cbor"
            ))),
        }
    }
}

/// Text formats would write NaN and infinities as `null`, which reads back as absent.
fn serialize_finite<S: Serializer>(v: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        serializer.serialize_f64(v)
    } else {
        Err(ser::Error::custom(format_args!("{v} has no text representation")))
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericVisitor)
    }
}

struct NumericVisitor;

impl<'de> Visitor<'de> for NumericVisitor {
    type Value = Numeric;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Numeric, E> {
        Ok(Numeric::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Numeric, E> {
        Ok(Numeric::Uint(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Numeric, E> {
        Ok(Numeric::Float(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Numeric, E> {
        Ok(Numeric::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Numeric, E> {
        Ok(Numeric::Absent)
    }
}
