#![no_main]

use libfuzzer_sys::fuzz_target;
use senml_codec::{Config, compact, cbor};

fuzz_target!(|data: &[u8]| {
    let Ok(records) = cbor::records_from_cbor(data) else {
        return;
    };
    // Whatever decodes must resolve or fail cleanly, then compact and encode again.
    let config = Config::new().with_auto_time(false);
    if let Ok(measurements) = senml_codec::resolve_with(&records, &config) {
        let _ = cbor::records_to_cbor(&compact(&measurements));
    }
});
