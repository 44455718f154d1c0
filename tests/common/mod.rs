//! Shared helpers for integration tests

#![allow(dead_code)]

use senml_codec::{Attributes, Config, Measurement, Numeric};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness; `RUST_LOG=senml_codec=trace` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Decoding without an implicit "now", so expectations are stable
pub fn fixed_config() -> Config {
    Config::new().with_auto_time(false)
}

pub fn at(secs: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(secs).unwrap()
}

pub fn value(name: &str, v: f64, unit: &str, time: Option<OffsetDateTime>) -> Measurement {
    let attrs = Attributes::new(name).with_unit(unit);
    let attrs = match time {
        Some(time) => attrs.with_time(time),
        None => attrs,
    };
    Measurement::Value(attrs, Numeric::Float(v))
}
