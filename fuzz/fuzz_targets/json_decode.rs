#![no_main]

use libfuzzer_sys::fuzz_target;
use senml_codec::{Config, compact, json};

fuzz_target!(|data: &[u8]| {
    let Ok(records) = json::records_from_json(data) else {
        return;
    };
    // Whatever decodes must resolve or fail cleanly, then compact and encode again.
    let config = Config::new().with_auto_time(false);
    if let Ok(measurements) = senml_codec::resolve_with(&records, &config) {
        let _ = json::records_to_json(&compact(&measurements));
    }
});
