#![no_main]

use ferry::domain::services::escaping::{escape_single_quoted, unescape_single_quoted};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(unescape_single_quoted(&escape_single_quoted(text)), text);
    }
});
