//! SenML Record - the wire-level representation

use serde::{Deserialize, Serialize};

use crate::numeric::Numeric;

/// A SenML Record as it appears on the wire
///
/// According to RFC 8428, every field is optional. Base fields (`b*`) set
/// defaults that apply to this record and every later one in the pack until
/// they are overwritten. Unset strings and bytes are empty, unset numbers are
/// [`Numeric::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Base Name - prepended to the names of this and later records
    #[serde(rename = "bn", default, skip_serializing_if = "String::is_empty")]
    pub base_name: String,

    /// Base Time - anchor for record times
    #[serde(rename = "bt", default, skip_serializing_if = "Numeric::is_absent")]
    pub base_time: Numeric,

    /// Base Unit - used when a record has no unit
    #[serde(rename = "bu", default, skip_serializing_if = "String::is_empty")]
    pub base_unit: String,

    /// Base Value - added to record values
    #[serde(rename = "bv", default, skip_serializing_if = "Numeric::is_absent")]
    pub base_value: Numeric,

    /// Base Sum - added to record sums
    #[serde(rename = "bs", default, skip_serializing_if = "Numeric::is_absent")]
    pub base_sum: Numeric,

    /// Base Version
    #[serde(rename = "bver", default, skip_serializing_if = "is_zero")]
    pub base_version: i64,

    /// Name
    #[serde(rename = "n", default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Unit
    #[serde(rename = "u", default, skip_serializing_if = "String::is_empty")]
    pub unit: String,

    /// Value
    #[serde(rename = "v", default, skip_serializing_if = "Numeric::is_absent")]
    pub value: Numeric,

    /// String Value
    #[serde(rename = "vs", default, skip_serializing_if = "String::is_empty")]
    pub string_value: String,

    /// Boolean Value
    #[serde(rename = "vb", default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,

    /// Data Value, base64url encoded in text formats
    #[serde(
        rename = "vd",
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64url"
    )]
    pub data_value: Vec<u8>,

    /// Sum
    #[serde(rename = "s", default, skip_serializing_if = "Numeric::is_absent")]
    pub sum: Numeric,

    /// Time
    #[serde(rename = "t", default, skip_serializing_if = "Numeric::is_absent")]
    pub time: Numeric,

    /// Update Time
    #[serde(rename = "ut", default, skip_serializing_if = "Numeric::is_absent")]
    pub update_time: Numeric,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }
}

/// Base64url (RFC 4648 section 5) for `vd`.
///
/// Written without padding as RFC 8428 requires; read with or without padding
/// and with either alphabet, since many producers emit standard base64.
pub(crate) mod base64url {
    use base64::Engine;
    use base64::alphabet;
    use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent);
    const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);
    const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);

    pub fn encode(data: &[u8]) -> String {
        URL_SAFE.encode(data)
    }

    pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
        if text.contains(['+', '/']) {
            STANDARD.decode(text)
        } else {
            URL_SAFE.decode(text)
        }
    }

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode(&text).map_err(de::Error::custom)
    }
}
