#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and key suggestions should never panic
        let _ = ferry::config::parse_with_warnings(content, Path::new("ferry.toml"));
    }
});
