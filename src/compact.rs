//! Compaction - choosing base values for a list of measurements
//!
//! The inverse of [`resolve`](crate::resolve): factors out a common name
//! prefix, the dominant unit and the earliest time, and writes them as base
//! fields on the first record.

use time::OffsetDateTime;

use crate::measurement::Measurement;
use crate::numeric::Numeric;
use crate::record::Record;
use crate::timestamp::{duration_to_numeric, timestamp_to_numeric};

/// Compact measurements into records, one per measurement and in order.
///
/// Base value, base sum and base version are never emitted.
pub fn compact(measurements: &[Measurement]) -> Vec<Record> {
    if measurements.is_empty() {
        return Vec::new();
    }

    let (base_name, base_unit, base_time) = if measurements.len() == 1 {
        (String::new(), String::new(), None)
    } else {
        (
            common_prefix(measurements.iter().map(Measurement::name)).to_string(),
            dominant_unit(measurements).to_string(),
            earliest_time(measurements),
        )
    };

    tracing::debug!(
        measurements = measurements.len(),
        base_name = %base_name,
        base_unit = %base_unit,
        base_time = ?base_time,
        "compacting measurements"
    );

    let mut records: Vec<Record> = measurements
        .iter()
        .map(|measurement| {
            let mut record = measurement.to_record();
            record.name = record.name[base_name.len()..].to_string();
            record.time = match (measurement.time(), base_time) {
                (time, base) if time == base => Numeric::Absent,
                (Some(time), Some(base)) => duration_to_numeric(time - base),
                (time, _) => timestamp_to_numeric(time),
            };
            if record.unit == base_unit {
                record.unit.clear();
            }
            record
        })
        .collect();

    if let Some(head) = records.first_mut() {
        head.base_name = base_name;
        head.base_unit = base_unit;
        if base_time.is_some_and(|t| t != OffsetDateTime::UNIX_EPOCH) {
            head.base_time = timestamp_to_numeric(base_time);
        }
    }
    records
}

/// Longest common prefix of all names, cut back to a character boundary.
///
/// Only the lexicographically smallest and largest names need comparing:
/// any prefix they share is shared by everything sorted between them.
fn common_prefix<'a>(mut names: impl Iterator<Item = &'a str>) -> &'a str {
    let Some(head) = names.next() else {
        return "";
    };
    let (min, max) = names.fold((head, head), |(min, max), name| {
        (min.min(name), max.max(name))
    });
    let mut len = min
        .bytes()
        .zip(max.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    while !min.is_char_boundary(len) {
        len -= 1;
    }
    &min[..len]
}

/// The unit whose labels account for the most bytes across all measurements.
///
/// Empty when any measurement has no unit, or when no unit contributes more
/// than one byte. Ties go to the unit seen first.
fn dominant_unit(measurements: &[Measurement]) -> &str {
    let mut totals: Vec<(&str, usize)> = Vec::new();
    for unit in measurements.iter().map(Measurement::unit) {
        if unit.is_empty() {
            return "";
        }
        match totals.iter_mut().find(|(u, _)| *u == unit) {
            Some((_, total)) => *total += unit.len(),
            None => totals.push((unit, unit.len())),
        }
    }

    let mut best = ("", 1);
    for (unit, total) in totals {
        if total > best.1 {
            best = (unit, total);
        }
    }
    best.0
}

/// Earliest time, where an unset time sorts before every instant
fn earliest_time(measurements: &[Measurement]) -> Option<OffsetDateTime> {
    measurements
        .iter()
        .map(Measurement::time)
        .reduce(|earliest, time| if time < earliest { time } else { earliest })
        .flatten()
}
