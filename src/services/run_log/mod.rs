//! Reconstruction of one workflow run's logs from its downloaded archive.
//!
//! The archive layout is a contract with the CI system: top-level
//! `<index>_<job name>.txt` job summaries and `<job name>/<index>_<step
//! name>.txt` step logs. Entry order inside the archive carries no
//! meaning; the document is ordered by the padded keys derived from the
//! entry names.

mod assembler;
mod types;
mod walker;

pub use assembler::NO_LOGS_TEXT;
pub use types::RunStructure;

use crate::types::errors::ExtractResult;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Rebuild the ordered log document for one workflow run.
///
/// The archive handle lives only for this call and is dropped on every
/// exit path, including decode failures. An archive with no job
/// summaries renders [`NO_LOGS_TEXT`], not an empty string.
pub fn extract_log<R: Read + Seek>(source: R) -> ExtractResult<String> {
    let mut archive = zip::ZipArchive::new(source)?;
    let run = walker::walk_entries(&mut archive)?;
    Ok(assembler::render_document(&run))
}

/// Wrapper for an archive already buffered in memory, e.g. the body of
/// a completed download.
pub fn extract_log_from_bytes(bytes: &[u8]) -> ExtractResult<String> {
    extract_log(Cursor::new(bytes))
}

/// Wrapper for an archive stored on disk.
pub fn extract_log_from_path(archive_path: &Path) -> ExtractResult<String> {
    let file = fs::File::open(archive_path)?;
    extract_log(file)
}

#[cfg(test)]
#[path = "tests/run_log_tests.rs"]
mod tests;
