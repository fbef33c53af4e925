#![no_main]

use libfuzzer_sys::fuzz_target;
use xdetex::domain::ports::ArchiveReader;
use xdetex::domain::value_objects::RequiredManifest;
use xdetex::infrastructure::ZipArchiveReader;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are either a readable archive or CorruptArchive, never a panic
    let manifest = RequiredManifest::facebook_export();
    if let Ok(extraction) = ZipArchiveReader::new().extract(data, &manifest) {
        assert!(extraction.files.len() <= manifest.len());
        for file in &extraction.files {
            assert!(manifest.contains(file.name()));
        }
    }
});
