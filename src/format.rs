//! SenML representations, their media types and CoAP Content-Formats

use std::fmt;

use crate::config::Config;
use crate::content_format;
use crate::measurement::Measurement;
use crate::{Result, SenMLError};

/// Media types registered by RFC 8428
pub mod media_type {
    pub const SENML_JSON: &str = "application/senml+json";
    pub const SENSML_JSON: &str = "application/sensml+json";
    pub const SENML_CBOR: &str = "application/senml+cbor";
    pub const SENSML_CBOR: &str = "application/sensml+cbor";
    pub const SENML_XML: &str = "application/senml+xml";
    pub const SENSML_XML: &str = "application/sensml+xml";
}

/// A SenML wire representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Cbor,
    Xml,
}

impl Format {
    /// Media type of a SenML pack in this format
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Json => media_type::SENML_JSON,
            Format::Cbor => media_type::SENML_CBOR,
            Format::Xml => media_type::SENML_XML,
        }
    }

    /// CoAP Content-Format of a SenML pack in this format
    pub fn content_format(self) -> u16 {
        match self {
            Format::Json => content_format::SENML_JSON,
            Format::Cbor => content_format::SENML_CBOR,
            Format::Xml => content_format::SENML_XML,
        }
    }

    /// Format for a CoAP Content-Format number. Streams map to the pack format.
    pub fn from_content_format(number: u16) -> Option<Self> {
        match number {
            content_format::SENML_JSON | content_format::SENSML_JSON => Some(Format::Json),
            content_format::SENML_CBOR | content_format::SENSML_CBOR => Some(Format::Cbor),
            content_format::SENML_XML | content_format::SENSML_XML => Some(Format::Xml),
            _ => None,
        }
    }

    /// Format for a `Content-Type` header value; parameters are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        [
            (media_type::SENML_JSON, Format::Json),
            (media_type::SENSML_JSON, Format::Json),
            (media_type::SENML_CBOR, Format::Cbor),
            (media_type::SENSML_CBOR, Format::Cbor),
            (media_type::SENML_XML, Format::Xml),
            (media_type::SENSML_XML, Format::Xml),
        ]
        .into_iter()
        .find_map(|(name, format)| essence.eq_ignore_ascii_case(name).then_some(format))
    }

    /// Compact and encode measurements
    pub fn encode(self, measurements: &[Measurement]) -> Result<Vec<u8>> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => crate::json::encode_json(measurements),
            #[cfg(feature = "cbor")]
            Format::Cbor => crate::cbor::encode_cbor(measurements),
            #[cfg(feature = "xml")]
            Format::Xml => crate::xml::encode_xml(measurements),
            #[allow(unreachable_patterns)]
            other => Err(SenMLError::serialization(format!("{other} support is not enabled"))),
        }
    }

    /// Decode and resolve with the default [`Config`]
    pub fn decode(self, bytes: &[u8]) -> Result<Vec<Measurement>> {
        self.decode_with(bytes, &Config::default())
    }

    /// Decode and resolve with `config`
    pub fn decode_with(self, bytes: &[u8], config: &Config) -> Result<Vec<Measurement>> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => crate::json::decode_json_with(bytes, config),
            #[cfg(feature = "cbor")]
            Format::Cbor => crate::cbor::decode_cbor_with(bytes, config),
            #[cfg(feature = "xml")]
            Format::Xml => crate::xml::decode_xml_with(bytes, config),
            #[allow(unreachable_patterns)]
            other => {
                let _ = (bytes, config);
                Err(SenMLError::deserialization(format!("{other} support is not enabled")))
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "SenML JSON",
            Format::Cbor => "SenML CBOR",
            Format::Xml => "SenML XML",
        })
    }
}
