//! Conversions between wire time values and absolute instants
//!
//! SenML overloads `bt`/`t` for both absolute Unix times and offsets relative
//! to "now"; values at or above 2^28 seconds are absolute (RFC 8428 section 4.5.3).

use time::{Duration, OffsetDateTime};

use crate::numeric::Numeric;

/// Smallest time value (2^28 seconds) treated as an absolute Unix time
pub const ABSOLUTE_TIME_THRESHOLD: f64 = 268_435_456.0;

/// Seconds since the epoch; integral when there is no sub-second part
pub fn timestamp_to_numeric(t: Option<OffsetDateTime>) -> Numeric {
    match t {
        None => Numeric::Absent,
        Some(t) if t.nanosecond() == 0 => Numeric::Int(t.unix_timestamp()),
        Some(t) => Numeric::Float(t.unix_timestamp_nanos() as f64 / 1e9),
    }
}

/// Seconds as a wire value; zero is absent, whole seconds stay integral
pub fn duration_to_numeric(d: Duration) -> Numeric {
    if d.is_zero() {
        Numeric::Absent
    } else if d.subsec_nanoseconds() == 0 {
        Numeric::Int(d.whole_seconds())
    } else {
        Numeric::Float(d.as_seconds_f64())
    }
}

/// Absolute instant for a count of seconds since the epoch.
///
/// Returns `None` for an absent value or one outside the representable range.
pub fn numeric_to_timestamp(n: &Numeric) -> Option<OffsetDateTime> {
    match n {
        Numeric::Absent => None,
        Numeric::Int(_) | Numeric::Uint(_) => OffsetDateTime::from_unix_timestamp(n.to_i64()).ok(),
        Numeric::Float(_) | Numeric::Decimal(_) => {
            OffsetDateTime::UNIX_EPOCH.checked_add(float_to_duration(n.to_f64()))
        }
    }
}

/// Signed duration for a count of seconds
pub fn numeric_to_duration(n: &Numeric) -> Duration {
    match n {
        Numeric::Absent => Duration::ZERO,
        Numeric::Int(_) | Numeric::Uint(_) => Duration::seconds(n.to_i64()),
        Numeric::Float(_) | Numeric::Decimal(_) => float_to_duration(n.to_f64()),
    }
}

fn float_to_duration(secs: f64) -> Duration {
    let whole = secs.trunc();
    // NaN and infinities collapse to zero nanoseconds here.
    let nanos = ((secs - whole) * 1e9).round() as i32;
    Duration::new(whole as i64, nanos)
}

/// Resolve a record time against its base time.
///
/// The anchor is `now` when `base` is absent or zero, `base` itself when it is
/// an absolute time, and `now + base` otherwise. An absent `value` yields the
/// anchor; without an anchor `value` is taken as absolute; otherwise `value`
/// is an offset from the anchor.
pub fn resolve_time(
    base: &Numeric,
    value: &Numeric,
    now: Option<OffsetDateTime>,
) -> Option<OffsetDateTime> {
    let base_secs = base.to_f64();
    let anchor = if base.is_absent() || base_secs == 0.0 {
        now
    } else if base_secs >= ABSOLUTE_TIME_THRESHOLD {
        numeric_to_timestamp(base)
    } else {
        now.and_then(|now| now.checked_add(numeric_to_duration(base)))
    };

    if value.is_absent() {
        return anchor;
    }
    match anchor {
        None => numeric_to_timestamp(value),
        Some(anchor) => anchor.checked_add(numeric_to_duration(value)),
    }
}
