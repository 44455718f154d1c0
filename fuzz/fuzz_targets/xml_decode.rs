#![no_main]

use libfuzzer_sys::fuzz_target;
use senml_codec::{Config, compact, xml};

fuzz_target!(|data: &[u8]| {
    let Ok(records) = xml::records_from_xml(data) else {
        return;
    };
    // Whatever decodes must resolve or fail cleanly, then compact and encode again.
    let config = Config::new().with_auto_time(false);
    if let Ok(measurements) = senml_codec::resolve_with(&records, &config) {
        let _ = xml::records_to_xml(&compact(&measurements));
    }
});
