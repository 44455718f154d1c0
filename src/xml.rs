//! XML serialization support for SenML
//!
//! RFC 8428 section 7: a `<sensml>` root in the `urn:ietf:params:xml:ns:senml`
//! namespace holding one `<senml>` element per record, with every field as an
//! attribute named by its JSON label.

use std::borrow::Cow;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::config::Config;
use crate::decimal::Decimal;
use crate::measurement::Measurement;
use crate::numeric::Numeric;
use crate::record::{Record, base64url};
use crate::{Result, SenMLError, compact, resolve_with};

/// XML namespace of SenML documents
pub const SENML_XML_NAMESPACE: &str = "urn:ietf:params:xml:ns:senml";

const PACK_ELEMENT: &str = "sensml";
const RECORD_ELEMENT: &str = "senml";

/// Compact measurements and encode them as SenML XML
pub fn encode_xml(measurements: &[Measurement]) -> Result<Vec<u8>> {
    records_to_xml(&compact(measurements))
}

/// Decode SenML XML and resolve it with the default [`Config`]
pub fn decode_xml(bytes: &[u8]) -> Result<Vec<Measurement>> {
    decode_xml_with(bytes, &Config::default())
}

/// Decode SenML XML and resolve it with `config`
pub fn decode_xml_with(bytes: &[u8], config: &Config) -> Result<Vec<Measurement>> {
    resolve_with(&records_from_xml(bytes)?, config)
}

/// Write records as a `<sensml>` document
pub fn records_to_xml(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    let mut root = BytesStart::new(PACK_ELEMENT);
    root.push_attribute(("xmlns", SENML_XML_NAMESPACE));
    writer.write_event(Event::Start(root)).map_err(write_error)?;

    for record in records {
        let mut element = BytesStart::new(RECORD_ELEMENT);
        for (key, value) in record_attributes(record) {
            element.push_attribute((key, value.as_str()));
        }
        writer.write_event(Event::Empty(element)).map_err(write_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(PACK_ELEMENT)))
        .map_err(write_error)?;

    let bytes = writer.into_inner();
    tracing::trace!(records = records.len(), bytes = bytes.len(), "encoded SenML XML");
    Ok(bytes)
}

/// Read records from a `<sensml>` document. Unknown elements and attributes are skipped.
pub fn records_from_xml(bytes: &[u8]) -> Result<Vec<Record>> {
    let text = std::str::from_utf8(bytes).map_err(read_error)?;
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut in_pack = false;
    let mut records = Vec::new();
    loop {
        match reader.read_event().map_err(read_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == PACK_ELEMENT.as_bytes() => {
                in_pack = true;
            }
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == RECORD_ELEMENT.as_bytes() => {
                if !in_pack {
                    return Err(SenMLError::deserialization(
                        "senml element outside of a sensml pack",
                    ));
                }
                records.push(record_from_element(&e)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !in_pack {
        return Err(SenMLError::deserialization("missing sensml root element"));
    }
    tracing::trace!(records = records.len(), bytes = bytes.len(), "decoded SenML XML");
    Ok(records)
}

fn write_error(err: impl ToString) -> SenMLError {
    SenMLError::serialization(err.to_string())
}

fn read_error(err: impl ToString) -> SenMLError {
    SenMLError::deserialization(err.to_string())
}

fn record_attributes(record: &Record) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::new();
    let mut text = |key, value: &str| {
        if !value.is_empty() {
            attrs.push((key, value.to_owned()));
        }
    };
    text("bn", &record.base_name);
    text("bt", &format_numeric(&record.base_time));
    text("bu", &record.base_unit);
    text("bv", &format_numeric(&record.base_value));
    text("bs", &format_numeric(&record.base_sum));
    if record.base_version != 0 {
        text("bver", &record.base_version.to_string());
    }
    text("n", &record.name);
    text("u", &record.unit);
    text("v", &format_numeric(&record.value));
    text("vs", &record.string_value);
    if let Some(vb) = record.boolean_value {
        text("vb", if vb { "true" } else { "false" });
    }
    text("vd", &base64url::encode(&record.data_value));
    text("s", &format_numeric(&record.sum));
    text("t", &format_numeric(&record.time));
    text("ut", &format_numeric(&record.update_time));
    attrs
}

/// Lexical form that reads back as the same kind of number
fn format_numeric(n: &Numeric) -> String {
    match *n {
        Numeric::Absent => String::new(),
        Numeric::Int(i) => i.to_string(),
        Numeric::Uint(u) => u.to_string(),
        Numeric::Float(f) => {
            let text = f.to_string();
            if text.contains(['.', 'i', 'N']) {
                text
            } else {
                format!("{text}.0")
            }
        }
        Numeric::Decimal(d) => d.to_string(),
    }
}

fn parse_numeric(field: &str, text: &str) -> Result<Numeric> {
    if let Ok(u) = text.parse::<u64>() {
        Ok(Numeric::Uint(u))
    } else if let Ok(i) = text.parse::<i64>() {
        Ok(Numeric::Int(i))
    } else if let Ok(d) = text.parse::<Decimal>() {
        Ok(Numeric::Decimal(d))
    } else if let Ok(f) = text.parse::<f64>() {
        Ok(Numeric::Float(f))
    } else {
        Err(SenMLError::invalid_field_value(field, text))
    }
}

fn parse_bool(text: &str) -> Result<bool> {
    match text {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(SenMLError::invalid_field_value("vb", other)),
    }
}

fn record_from_element(element: &BytesStart<'_>) -> Result<Record> {
    let mut record = Record::new();
    for attr in element.attributes() {
        let attr = attr.map_err(read_error)?;
        let value: Cow<'_, str> = attr.unescape_value().map_err(read_error)?;
        match attr.key.local_name().as_ref() {
            b"bn" => record.base_name = value.into_owned(),
            b"bt" => record.base_time = parse_numeric("bt", &value)?,
            b"bu" => record.base_unit = value.into_owned(),
            b"bv" => record.base_value = parse_numeric("bv", &value)?,
            b"bs" => record.base_sum = parse_numeric("bs", &value)?,
            b"bver" => {
                record.base_version = value
                    .parse()
                    .map_err(|_| SenMLError::invalid_field_value("bver", value.as_ref()))?;
            }
            b"n" => record.name = value.into_owned(),
            b"u" => record.unit = value.into_owned(),
            b"v" => record.value = parse_numeric("v", &value)?,
            b"vs" => record.string_value = value.into_owned(),
            b"vb" => record.boolean_value = Some(parse_bool(&value)?),
            b"vd" => {
                record.data_value = base64url::decode(&value)
                    .map_err(|_| SenMLError::invalid_field_value("vd", value.as_ref()))?;
            }
            b"s" => record.sum = parse_numeric("s", &value)?,
            b"t" => record.time = parse_numeric("t", &value)?,
            b"ut" => record.update_time = parse_numeric("ut", &value)?,
            _ => {}
        }
    }
    Ok(record)
}
