//! Property tests for archive entry matching.

use std::io::{Cursor, Write};

use proptest::prelude::*;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use xdetex::domain::ports::ArchiveReader;
use xdetex::domain::value_objects::RequiredManifest;
use xdetex::infrastructure::ZipArchiveReader;

fn folder() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[A-Za-z0-9 _-]{1,12}").unwrap();
    proptest::collection::vec(segment, 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a required file is found at any depth with either separator.
    #[test]
    fn property_required_name_found_at_any_depth(
        segments in folder(),
        backslash in any::<bool>(),
        index in 0usize..5
    ) {
        let manifest = RequiredManifest::facebook_export();
        let name = manifest.files()[index].name().to_string();
        let sep = if backslash { "\\" } else { "/" };
        let mut path = segments.join(sep);
        if !path.is_empty() {
            path.push_str(sep);
        }
        path.push_str(&name);

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(path.as_str(), SimpleFileOptions::default()).unwrap();
        writer.write_all(b"{\"ok\":true}").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let extraction = ZipArchiveReader::new().extract(&bytes, &manifest).unwrap();
        prop_assert_eq!(extraction.files.len(), 1);
        prop_assert_eq!(extraction.files[0].name(), name.as_str());
        prop_assert!(extraction.extras.is_empty());
    }

    /// PROPERTY: arbitrary bytes never panic the reader.
    #[test]
    fn property_garbage_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let manifest = RequiredManifest::facebook_export();
        let _ = ZipArchiveReader::new().extract(&bytes, &manifest);
    }
}
