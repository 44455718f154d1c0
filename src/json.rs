//! JSON serialization support for SenML (RFC 8428 section 5)

use crate::config::Config;
use crate::measurement::Measurement;
use crate::record::Record;
use crate::{Result, SenMLError, compact, resolve_with};

/// Compact measurements and encode them as SenML JSON
pub fn encode_json(measurements: &[Measurement]) -> Result<Vec<u8>> {
    records_to_json(&compact(measurements))
}

/// Decode SenML JSON and resolve it with the default [`Config`]
pub fn decode_json(bytes: &[u8]) -> Result<Vec<Measurement>> {
    decode_json_with(bytes, &Config::default())
}

/// Decode SenML JSON and resolve it with `config`
pub fn decode_json_with(bytes: &[u8], config: &Config) -> Result<Vec<Measurement>> {
    resolve_with(&records_from_json(bytes)?, config)
}

/// Serialize records to a JSON array, omitting unset fields
pub fn records_to_json(records: &[Record]) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(records)
        .map_err(|err| SenMLError::serialization(err.to_string()))?;
    tracing::trace!(records = records.len(), bytes = bytes.len(), "encoded SenML JSON");
    Ok(bytes)
}

/// Deserialize records from a JSON array. Unknown fields are ignored.
pub fn records_from_json(bytes: &[u8]) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    tracing::trace!(records = records.len(), bytes = bytes.len(), "decoded SenML JSON");
    Ok(records)
}
