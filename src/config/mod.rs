use time::OffsetDateTime;

/// Options consulted while resolving records into measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Anchor times that are unset or relative to the current instant.
    ///
    /// When disabled they are anchored to nothing: records without a time
    /// stay unset, which makes decoding deterministic.
    pub auto_time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { auto_time: true }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_time(mut self, auto_time: bool) -> Self {
        self.auto_time = auto_time;
        self
    }

    /// The reference instant for one resolve call
    pub(crate) fn now(&self) -> Option<OffsetDateTime> {
        self.auto_time.then(OffsetDateTime::now_utc)
    }
}
