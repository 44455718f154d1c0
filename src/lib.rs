//! # SenML Codec - Sensor Measurement Lists for Rust
//!
//! An implementation of [RFC 8428](https://tools.ietf.org/html/rfc8428) - Sensor Measurement Lists (SenML).
//!
//! SenML packs are sequences of records in which base fields (`bn`, `bt`, `bu`,
//! `bv`, `bs`) set defaults for the records that follow. This crate converts
//! between packs on the wire and self-contained [`Measurement`]s:
//!
//! - **Resolve** ([`resolve`]) expands base fields so every measurement carries
//!   its full name, unit and absolute time.
//! - **Compact** ([`compact`]) chooses base fields for a list of measurements so
//!   the encoded pack stays small.
//!
//! Numbers are carried as [`Numeric`], so integers, floats and exact decimal
//! fractions (CBOR tag 4) keep their representation across a round trip.
//!
//! ## Quick Start
//!
//! ```rust
//! use senml_codec::{Config, decode_json_with, encode_json};
//!
//! # fn main() -> senml_codec::Result<()> {
//! let json = br#"[
//!     {"bn":"urn:dev:ow:10e2073a01080063:","bt":1320067464,"bu":"%RH","n":"humidity","v":20},
//!     {"n":"temperature","u":"Cel","v":23.1}
//! ]"#;
//! let measurements = decode_json_with(json, &Config::new().with_auto_time(false))?;
//! assert_eq!(measurements[1].name(), "urn:dev:ow:10e2073a01080063:temperature");
//! assert_eq!(measurements[1].unit(), "Cel");
//!
//! let encoded = encode_json(&measurements)?;
//! assert_eq!(decode_json_with(&encoded, &Config::new().with_auto_time(false))?, measurements);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `json` (default): SenML JSON via `serde_json`
//! - `cbor` (default): SenML CBOR via `ciborium`
//! - `xml`: SenML XML via `quick-xml`

pub mod compact;
pub mod config;
pub mod decimal;
pub mod error;
pub mod format;
pub mod measurement;
pub mod numeric;
pub mod record;
pub mod resolve;
pub mod timestamp;
pub mod units;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cbor")]
pub mod cbor;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export main types
pub use compact::compact;
pub use config::Config;
pub use decimal::Decimal;
pub use error::{Result, SenMLError};
pub use format::Format;
pub use measurement::{Attributes, Measurement};
pub use numeric::Numeric;
pub use record::Record;
pub use resolve::{resolve, resolve_at, resolve_with};

#[cfg(feature = "json")]
pub use json::{decode_json, decode_json_with, encode_json};

#[cfg(feature = "cbor")]
pub use cbor::{CborExtension, decode_cbor, decode_cbor_with, encode_cbor};

#[cfg(feature = "xml")]
pub use xml::{decode_xml, decode_xml_with, encode_xml};

/// SenML Content-Format identifiers for CoAP
pub mod content_format {
    /// application/senml+json
    pub const SENML_JSON: u16 = 110;
    /// application/sensml+json
    pub const SENSML_JSON: u16 = 111;
    /// application/senml+cbor
    pub const SENML_CBOR: u16 = 112;
    /// application/sensml+cbor
    pub const SENSML_CBOR: u16 = 113;
    /// application/senml-exi
    pub const SENML_EXI: u16 = 114;
    /// application/sensml-exi
    pub const SENSML_EXI: u16 = 115;
    /// application/senml+xml
    pub const SENML_XML: u16 = 310;
    /// application/sensml+xml
    pub const SENSML_XML: u16 = 311;
}
