//! Resolution - expanding base values into self-contained measurements
//!
//! Base fields apply to the record carrying them and to every later record
//! until overwritten (RFC 8428 section 4.6), so records are folded left to
//! right over the bases in effect.

use time::OffsetDateTime;

use crate::config::Config;
use crate::measurement::{Attributes, Measurement};
use crate::numeric::Numeric;
use crate::record::Record;
use crate::timestamp::{numeric_to_duration, resolve_time};
use crate::{Result, SenMLError};

/// Base values in effect at a point in the pack
#[derive(Debug, Clone, Default)]
struct Bases {
    name: String,
    time: Numeric,
    unit: String,
    value: Numeric,
    sum: Numeric,
}

impl Bases {
    /// Bases in effect for `record`; its own base fields win.
    fn apply(mut self, record: &Record) -> Self {
        if !record.base_name.is_empty() {
            self.name.clone_from(&record.base_name);
        }
        if record.base_time.is_present() {
            self.time = record.base_time;
        }
        if !record.base_unit.is_empty() {
            self.unit.clone_from(&record.base_unit);
        }
        if record.base_value.is_present() {
            self.value = record.base_value;
        }
        if record.base_sum.is_present() {
            self.sum = record.base_sum;
        }
        self
    }

    fn resolve(
        &self,
        index: usize,
        record: &Record,
        now: Option<OffsetDateTime>,
    ) -> Result<Measurement> {
        let unit = if record.unit.is_empty() {
            self.unit.clone()
        } else {
            record.unit.clone()
        };
        let attrs = Attributes {
            name: format!("{}{}", self.name, record.name),
            unit,
            time: resolve_time(&self.time, &record.time, now),
            update_time: numeric_to_duration(&record.update_time),
        };

        if record.value.is_present() {
            Ok(Measurement::Value(attrs, self.value + record.value))
        } else if record.sum.is_present() {
            Ok(Measurement::Sum(attrs, self.sum + record.sum))
        } else if !record.string_value.is_empty() {
            Ok(Measurement::String(attrs, record.string_value.clone()))
        } else if !record.data_value.is_empty() {
            Ok(Measurement::Data(attrs, record.data_value.clone()))
        } else if let Some(vb) = record.boolean_value {
            Ok(Measurement::Boolean(attrs, vb))
        } else {
            Err(SenMLError::no_value(index))
        }
    }
}

/// Resolve records with the default [`Config`]
pub fn resolve(records: &[Record]) -> Result<Vec<Measurement>> {
    resolve_with(records, &Config::default())
}

/// Resolve records into one measurement each, in order
pub fn resolve_with(records: &[Record], config: &Config) -> Result<Vec<Measurement>> {
    tracing::debug!(
        records = records.len(),
        auto_time = config.auto_time,
        "resolving SenML records"
    );
    resolve_at(records, config.now())
}

/// Resolve records against an explicit reference instant.
///
/// `now` anchors records whose time is unset or relative; with `None` such
/// times are left unset.
pub fn resolve_at(records: &[Record], now: Option<OffsetDateTime>) -> Result<Vec<Measurement>> {
    let (_, measurements) = records.iter().enumerate().try_fold(
        (Bases::default(), Vec::with_capacity(records.len())),
        |(bases, mut measurements), (index, record)| {
            let bases = bases.apply(record);
            let measurement = bases
                .resolve(index, record, now)
                .inspect_err(|err| tracing::warn!(index, %err, "cannot resolve record"))?;
            measurements.push(measurement);
            Ok::<_, SenMLError>((bases, measurements))
        },
    )?;
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal;
    use time::Duration;

    fn at(secs: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(secs).unwrap()
    }

    fn value(name: &str, v: Numeric) -> Record {
        Record {
            name: name.into(),
            value: v,
            ..Record::new()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_at(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_base_name_and_unit_persist() {
        let records = vec![
            Record {
                base_name: "urn:dev:ow:10e2073a01080063:".into(),
                base_unit: "A".into(),
                ..value("voltage", Numeric::Float(120.1))
            },
            value("current", Numeric::Float(1.2)),
            Record {
                unit: "V".into(),
                ..value("voltage", Numeric::Float(120.3))
            },
        ];
        let ms = resolve_at(&records, None).unwrap();
        assert_eq!(ms.len(), 3);
        assert_eq!(ms[0].name(), "urn:dev:ow:10e2073a01080063:voltage");
        assert_eq!(ms[0].unit(), "A");
        assert_eq!(ms[1].name(), "urn:dev:ow:10e2073a01080063:current");
        assert_eq!(ms[1].unit(), "A");
        assert_eq!(ms[2].unit(), "V");
        assert_eq!(ms[2].time(), None);
    }

    #[test]
    fn test_bases_overwritten_mid_pack() {
        let records = vec![
            Record {
                base_name: "a/".into(),
                ..value("x", Numeric::Int(1))
            },
            Record {
                base_name: "b/".into(),
                ..value("x", Numeric::Int(2))
            },
            value("y", Numeric::Int(3)),
        ];
        let ms = resolve_at(&records, None).unwrap();
        let names: Vec<&str> = ms.iter().map(Measurement::name).collect();
        assert_eq!(names, ["a/x", "b/x", "b/y"]);
    }

    #[test]
    fn test_base_value_and_sum_are_added() {
        let records = vec![
            Record {
                base_value: Numeric::Int(20),
                base_sum: Numeric::Uint(100),
                ..value("temp", Numeric::Float(2.5))
            },
            Record {
                name: "energy".into(),
                sum: Numeric::Uint(5),
                ..Record::new()
            },
            value("count", Numeric::Int(-1)),
        ];
        let ms = resolve_at(&records, None).unwrap();
        assert_eq!(ms[0], Measurement::Value(Attributes::new("temp"), Numeric::Float(22.5)));
        assert!(matches!(ms[1], Measurement::Sum(_, Numeric::Uint(105))));
        assert!(matches!(ms[2], Measurement::Value(_, Numeric::Int(19))));
    }

    #[test]
    fn test_value_keeps_wire_type_without_base() {
        let records = vec![value("t", Numeric::Decimal(Decimal::new(-2, 27115)))];
        let ms = resolve_at(&records, None).unwrap();
        assert!(matches!(
            ms[0],
            Measurement::Value(_, Numeric::Decimal(d)) if d == Decimal::new(-2, 27115)
        ));
    }

    #[test]
    fn test_payload_priority() {
        let all = Record {
            name: "x".into(),
            value: Numeric::Int(1),
            sum: Numeric::Int(2),
            string_value: "s".into(),
            data_value: vec![1],
            boolean_value: Some(true),
            ..Record::new()
        };
        let m = resolve_at(std::slice::from_ref(&all), None).unwrap();
        assert!(matches!(m[0], Measurement::Value(..)));

        let no_value = Record { value: Numeric::Absent, ..all.clone() };
        let m = resolve_at(&[no_value.clone()], None).unwrap();
        assert!(matches!(m[0], Measurement::Sum(..)));

        let no_sum = Record { sum: Numeric::Absent, ..no_value };
        let m = resolve_at(&[no_sum.clone()], None).unwrap();
        assert!(matches!(m[0], Measurement::String(..)));

        let no_string = Record { string_value: String::new(), ..no_sum };
        let m = resolve_at(&[no_string.clone()], None).unwrap();
        assert!(matches!(m[0], Measurement::Data(..)));

        let no_data = Record { data_value: Vec::new(), ..no_string };
        let m = resolve_at(&[no_data], None).unwrap();
        assert!(matches!(m[0], Measurement::Boolean(_, true)));
    }

    #[test]
    fn test_record_without_value_fails_with_index() {
        let records = vec![
            value("ok", Numeric::Int(1)),
            Record {
                name: "empty".into(),
                unit: "V".into(),
                ..Record::new()
            },
            value("never", Numeric::Int(2)),
        ];
        let err = resolve_at(&records, None).unwrap_err();
        assert_eq!(err, SenMLError::NoValue { index: 1 });
    }

    #[test]
    fn test_base_fields_alone_are_not_a_value() {
        let bases_only = Record {
            base_name: "dev/".into(),
            base_value: Numeric::Int(5),
            base_sum: Numeric::Int(5),
            ..Record::new()
        };
        let err = resolve_at(&[bases_only], None).unwrap_err();
        assert_eq!(err, SenMLError::NoValue { index: 0 });

        let false_boolean = Record { boolean_value: Some(false), ..Record::new() };
        let m = resolve_at(&[false_boolean], None).unwrap();
        assert!(matches!(m[0], Measurement::Boolean(_, false)));
    }

    #[test]
    fn test_times_resolve_against_base_time() {
        let records = vec![
            Record {
                base_time: Numeric::Float(1.320067464e9),
                ..value("h", Numeric::Float(21.2))
            },
            Record {
                time: Numeric::Int(10),
                update_time: Numeric::Int(60),
                ..value("h", Numeric::Float(21.3))
            },
        ];
        let ms = resolve_at(&records, Some(at(5))).unwrap();
        assert_eq!(ms[0].time(), Some(at(1320067464)));
        assert_eq!(ms[1].time(), Some(at(1320067474)));
        assert_eq!(ms[1].attributes().update_time, Duration::seconds(60));
    }

    #[test]
    fn test_relative_times_use_now() {
        let now = at(1_700_000_000);
        let records = vec![
            Record {
                time: Numeric::Int(-5),
                ..value("x", Numeric::Int(1))
            },
            value("x", Numeric::Int(2)),
        ];
        let ms = resolve_at(&records, Some(now)).unwrap();
        assert_eq!(ms[0].time(), Some(now - Duration::seconds(5)));
        assert_eq!(ms[1].time(), Some(now));
    }

    #[test]
    fn test_config_without_auto_time() {
        let records = vec![value("x", Numeric::Int(1))];
        let config = Config::new().with_auto_time(false);
        let ms = resolve_with(&records, &config).unwrap();
        assert_eq!(ms[0].time(), None);

        let ms = resolve(&records).unwrap();
        assert!(ms[0].time().is_some());
    }
}
