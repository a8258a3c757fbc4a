use std::io::{Cursor, Write};
use std::sync::Once;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an in-memory zip archive from `(entry name, payload)` pairs.
pub fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, payload) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer
            .write_all(payload.as_bytes())
            .expect("write entry payload");
    }

    writer.finish().expect("finish archive").into_inner()
}
