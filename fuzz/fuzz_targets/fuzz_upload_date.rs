#![no_main]

use libfuzzer_sys::fuzz_target;
use xdetex::domain::value_objects::UploadDate;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let date = UploadDate::parse(raw);
        let _ = date.display_date();
    }
});
