//! Fuzz target: `DocumentHistorySource::from_json`
//!
//! Feeds arbitrary UTF-8 to the export parser and verifies:
//! - No panics on any input
//! - Accepted documents yield entries ordered oldest first
//!
//! cargo fuzz run fuzz_document

#![no_main]

use libfuzzer_sys::fuzz_target;
use reefwatch::adapters::document::DocumentHistorySource;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(src) = DocumentHistorySource::from_json(text) {
        let days: Vec<_> = src.entries().iter().filter_map(|e| e.day()).collect();
        assert!(days.windows(2).all(|w| w[0] <= w[1]));
    }
});
