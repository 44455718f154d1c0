//! CBOR serialization support for SenML (RFC 8428 section 6)
//!
//! Records are maps keyed by the RFC 8428 integer labels. Values go through
//! [`ciborium::value::Value`] so that integers, floats and tagged decimal
//! fractions each keep their own wire representation.

use ciborium::value::Value;

use crate::config::Config;
use crate::decimal::Decimal;
use crate::measurement::Measurement;
use crate::numeric::Numeric;
use crate::record::Record;
use crate::{Result, SenMLError, compact, resolve_with};

/// A value type carried inside a CBOR tag.
///
/// Implementors own a tag number and convert their tag content to and from a
/// CBOR value. Content that violates the type's shape is a decode error.
pub trait CborExtension: Sized {
    /// Tag number registered for the type
    const TAG: u64;

    /// Content placed inside the tag
    fn encode_content(&self) -> Value;

    /// Rebuild the type from tag content
    fn decode_content(content: Value) -> Result<Self>;

    /// The complete tagged value
    fn to_tagged(&self) -> Value {
        Value::Tag(Self::TAG, Box::new(self.encode_content()))
    }
}

/// Integer map keys for SenML fields
pub mod label {
    pub const BASE_VERSION: i64 = -1;
    pub const BASE_NAME: i64 = -2;
    pub const BASE_TIME: i64 = -3;
    pub const BASE_UNIT: i64 = -4;
    pub const BASE_VALUE: i64 = -5;
    pub const BASE_SUM: i64 = -6;
    pub const NAME: i64 = 0;
    pub const UNIT: i64 = 1;
    pub const VALUE: i64 = 2;
    pub const STRING_VALUE: i64 = 3;
    pub const BOOLEAN_VALUE: i64 = 4;
    pub const SUM: i64 = 5;
    pub const TIME: i64 = 6;
    pub const UPDATE_TIME: i64 = 7;
    pub const DATA_VALUE: i64 = 8;
}

/// Compact measurements and encode them as SenML CBOR
pub fn encode_cbor(measurements: &[Measurement]) -> Result<Vec<u8>> {
    records_to_cbor(&compact(measurements))
}

/// Decode SenML CBOR and resolve it with the default [`Config`]
pub fn decode_cbor(bytes: &[u8]) -> Result<Vec<Measurement>> {
    decode_cbor_with(bytes, &Config::default())
}

/// Decode SenML CBOR and resolve it with `config`
pub fn decode_cbor_with(bytes: &[u8], config: &Config) -> Result<Vec<Measurement>> {
    resolve_with(&records_from_cbor(bytes)?, config)
}

/// Encode records as a CBOR array of label-keyed maps
pub fn records_to_cbor(records: &[Record]) -> Result<Vec<u8>> {
    let pack = Value::Array(records.iter().map(record_to_value).collect());
    let mut buffer = Vec::new();
    ciborium::ser::into_writer(&pack, &mut buffer)?;
    tracing::trace!(records = records.len(), bytes = buffer.len(), "encoded SenML CBOR");
    Ok(buffer)
}

/// Decode a CBOR array of label-keyed maps. Unknown labels are skipped.
pub fn records_from_cbor(bytes: &[u8]) -> Result<Vec<Record>> {
    let pack: Value = ciborium::de::from_reader(bytes)?;
    let Value::Array(items) = pack else {
        return Err(SenMLError::deserialization("SenML CBOR must be an array of records"));
    };
    let records = items
        .into_iter()
        .map(record_from_value)
        .collect::<Result<Vec<_>>>()?;
    tracing::trace!(records = records.len(), bytes = bytes.len(), "decoded SenML CBOR");
    Ok(records)
}

fn record_to_value(record: &Record) -> Value {
    let mut map = Vec::new();
    if record.base_version != 0 {
        put(&mut map, label::BASE_VERSION, Value::Integer(record.base_version.into()));
    }
    put_text(&mut map, label::BASE_NAME, &record.base_name);
    put_numeric(&mut map, label::BASE_TIME, &record.base_time);
    put_text(&mut map, label::BASE_UNIT, &record.base_unit);
    put_numeric(&mut map, label::BASE_VALUE, &record.base_value);
    put_numeric(&mut map, label::BASE_SUM, &record.base_sum);
    put_text(&mut map, label::NAME, &record.name);
    put_text(&mut map, label::UNIT, &record.unit);
    put_numeric(&mut map, label::VALUE, &record.value);
    put_text(&mut map, label::STRING_VALUE, &record.string_value);
    if let Some(vb) = record.boolean_value {
        put(&mut map, label::BOOLEAN_VALUE, Value::Bool(vb));
    }
    put_numeric(&mut map, label::SUM, &record.sum);
    put_numeric(&mut map, label::TIME, &record.time);
    put_numeric(&mut map, label::UPDATE_TIME, &record.update_time);
    if !record.data_value.is_empty() {
        put(&mut map, label::DATA_VALUE, Value::Bytes(record.data_value.clone()));
    }
    Value::Map(map)
}

fn put(map: &mut Vec<(Value, Value)>, label: i64, value: Value) {
    map.push((Value::Integer(label.into()), value));
}

fn put_text(map: &mut Vec<(Value, Value)>, label: i64, text: &str) {
    if !text.is_empty() {
        put(map, label, Value::Text(text.to_owned()));
    }
}

fn put_numeric(map: &mut Vec<(Value, Value)>, label: i64, n: &Numeric) {
    let value = match *n {
        Numeric::Absent => return,
        Numeric::Int(i) => Value::Integer(i.into()),
        Numeric::Uint(u) => Value::Integer(u.into()),
        Numeric::Float(f) => Value::Float(f),
        Numeric::Decimal(d) => d.to_tagged(),
    };
    put(map, label, value);
}

fn record_from_value(value: Value) -> Result<Record> {
    let Value::Map(entries) = value else {
        return Err(SenMLError::deserialization("SenML CBOR record must be a map"));
    };

    let mut record = Record::new();
    for (key, value) in entries {
        let Some(key) = key.as_integer().and_then(|i| i64::try_from(i).ok()) else {
            tracing::trace!(?key, "skipping non-integer label");
            continue;
        };
        match key {
            label::BASE_VERSION => record.base_version = integer_field("bver", value)?,
            label::BASE_NAME => record.base_name = text_field("bn", value)?,
            label::BASE_TIME => record.base_time = numeric_field("bt", value)?,
            label::BASE_UNIT => record.base_unit = text_field("bu", value)?,
            label::BASE_VALUE => record.base_value = numeric_field("bv", value)?,
            label::BASE_SUM => record.base_sum = numeric_field("bs", value)?,
            label::NAME => record.name = text_field("n", value)?,
            label::UNIT => record.unit = text_field("u", value)?,
            label::VALUE => record.value = numeric_field("v", value)?,
            label::STRING_VALUE => record.string_value = text_field("vs", value)?,
            label::BOOLEAN_VALUE => match value {
                Value::Bool(vb) => record.boolean_value = Some(vb),
                other => return Err(unexpected("vb", &other)),
            },
            label::SUM => record.sum = numeric_field("s", value)?,
            label::TIME => record.time = numeric_field("t", value)?,
            label::UPDATE_TIME => record.update_time = numeric_field("ut", value)?,
            label::DATA_VALUE => match value {
                Value::Bytes(vd) => record.data_value = vd,
                other => return Err(unexpected("vd", &other)),
            },
            other => tracing::trace!(label = other, "skipping unknown label"),
        }
    }
    Ok(record)
}

fn text_field(field: &str, value: Value) -> Result<String> {
    match value {
        Value::Text(text) => Ok(text),
        other => Err(unexpected(field, &other)),
    }
}

fn integer_field(field: &str, value: Value) -> Result<i64> {
    match value {
        Value::Integer(i) => {
            i64::try_from(i).map_err(|_| SenMLError::invalid_field_value(field, i128::from(i).to_string()))
        }
        other => Err(unexpected(field, &other)),
    }
}

fn numeric_field(field: &str, value: Value) -> Result<Numeric> {
    match value {
        Value::Integer(i) => match u64::try_from(i) {
            Ok(u) => Ok(Numeric::Uint(u)),
            Err(_) => integer_field(field, Value::Integer(i)).map(Numeric::Int),
        },
        Value::Float(f) => Ok(Numeric::Float(f)),
        Value::Tag(tag, content) if tag == Decimal::TAG => {
            Decimal::decode_content(*content).map(Numeric::Decimal)
        }
        Value::Tag(tag, _) => Err(SenMLError::UnsupportedTag { tag }),
        other => Err(unexpected(field, &other)),
    }
}

fn unexpected(field: &str, value: &Value) -> SenMLError {
    SenMLError::invalid_field_value(field, format!("{value:?}"))
}
