//! Resolved measurements
//!
//! A [`Measurement`] is self-contained: its name is fully expanded, its unit
//! is explicit and its time is absolute. This is what [`resolve`](crate::resolve)
//! produces and what [`compact`](crate::compact) consumes.

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::numeric::Numeric;
use crate::record::Record;
use crate::timestamp::{duration_to_numeric, timestamp_to_numeric};

/// Properties shared by every kind of measurement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// Fully expanded name
    pub name: String,
    /// Unit label, empty for none
    pub unit: String,
    /// Absolute time, `None` when unset
    pub time: Option<OffsetDateTime>,
    /// Maximum time before the next update
    pub update_time: Duration,
}

impl Attributes {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_time(mut self, time: OffsetDateTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_update_time(mut self, update_time: Duration) -> Self {
        self.update_time = update_time;
        self
    }

    fn to_record(&self) -> Record {
        Record {
            name: self.name.clone(),
            unit: self.unit.clone(),
            time: timestamp_to_numeric(self.time),
            update_time: duration_to_numeric(self.update_time),
            ..Record::default()
        }
    }
}

/// A resolved SenML measurement with exactly one payload
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// Numeric value (`v`)
    Value(Attributes, Numeric),
    /// Integrated sum (`s`)
    Sum(Attributes, Numeric),
    /// String value (`vs`)
    String(Attributes, String),
    /// Boolean value (`vb`)
    Boolean(Attributes, bool),
    /// Binary data (`vd`)
    Data(Attributes, Vec<u8>),
}

impl Measurement {
    pub fn attributes(&self) -> &Attributes {
        match self {
            Measurement::Value(attrs, _)
            | Measurement::Sum(attrs, _)
            | Measurement::String(attrs, _)
            | Measurement::Boolean(attrs, _)
            | Measurement::Data(attrs, _) => attrs,
        }
    }

    pub fn name(&self) -> &str {
        &self.attributes().name
    }

    pub fn unit(&self) -> &str {
        &self.attributes().unit
    }

    pub fn time(&self) -> Option<OffsetDateTime> {
        self.attributes().time
    }

    /// The record carrying this measurement on its own, with no base fields
    pub fn to_record(&self) -> Record {
        let mut record = self.attributes().to_record();
        match self {
            Measurement::Value(_, v) => record.value = *v,
            Measurement::Sum(_, s) => record.sum = *s,
            Measurement::String(_, vs) => record.string_value = vs.clone(),
            Measurement::Boolean(_, vb) => record.boolean_value = Some(*vb),
            Measurement::Data(_, vd) => record.data_value = vd.clone(),
        }
        record
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = self.attributes();
        write!(f, "{}: ", attrs.name)?;
        match self {
            Measurement::Value(_, v) => write!(f, "{v}")?,
            Measurement::Sum(_, s) => write!(f, "sum {s}")?,
            Measurement::String(_, vs) => write!(f, "{vs:?}")?,
            Measurement::Boolean(_, vb) => write!(f, "{vb}")?,
            Measurement::Data(_, vd) => write!(f, "{} bytes", vd.len())?,
        }
        if !attrs.unit.is_empty() {
            write!(f, " {}", attrs.unit)?;
        }
        if let Some(time) = attrs.time {
            let time = time.format(&Rfc3339).map_err(|_| fmt::Error)?;
            write!(f, " @ {time}")?;
        }
        Ok(())
    }
}
