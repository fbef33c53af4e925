#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic
        if let Ok(config) = toml::from_str::<xdetex::Config>(content) {
            let _ = config.required_manifest(std::path::Path::new("fuzz.toml"));
        }
    }
});
