#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        // Whatever the server answers, parsing must fail cleanly
        let _ = ferry::domain::entities::ExecutionLog::parse(body);
    }
});
