use super::types::{pad_rank, RunStructure};
use crate::types::errors::{ExtractError, ExtractResult};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Suffix carried by the one accepted job-1 summary entry.
const JOB_ONE_SUFFIX: &str = " (1).txt";
const LOG_EXTENSION: &str = ".txt";

/// Walk every entry of a run archive and collect the job and step
/// mappings.
///
/// Classification is by path depth: one segment is a job summary, two
/// segments is a step log, anything deeper (and any directory entry) is
/// skipped. A name missing its `_` separator fails the whole walk; the
/// naming convention is a contract with the CI system, and tolerating a
/// violation would misattribute jobs or steps.
pub fn walk_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> ExtractResult<RunStructure> {
    let mut run = RunStructure::default();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        let segments: Vec<&str> = name.split('/').collect();

        match segments.as_slice() {
            [summary] => record_job_summary(&mut run, summary)?,
            [job, step_file] => {
                let key = step_key(step_file)?;
                let mut payload = Vec::new();
                entry.read_to_end(&mut payload)?;
                let text = String::from_utf8_lossy(&payload).into_owned();
                run.record_step(job, key, text);
            }
            _ => {
                log::debug!("Skipping entry with unexpected depth: {name}");
            }
        }
    }

    Ok(run)
}

/// Parse a top-level `<index>_<job name>.txt` summary entry. Only the
/// name is used; the payload is never read.
fn record_job_summary(run: &mut RunStructure, file_name: &str) -> ExtractResult<()> {
    let (raw_index, rest) = file_name.split_once('_').ok_or_else(|| {
        ExtractError::Naming(format!("job summary entry without '_': {file_name}"))
    })?;

    // The CI system emits a redundant concatenated-log artifact under
    // index 1, so two physical entries share that index. Only the
    // " (1).txt" variant is the real job summary. Compatibility shim for
    // the upstream naming quirk; drop it if the duplication ever stops.
    if raw_index == "1" && !file_name.ends_with(JOB_ONE_SUFFIX) {
        log::debug!("Skipping redundant job-1 artifact: {file_name}");
        return Ok(());
    }

    let job_name = rest
        .strip_suffix(JOB_ONE_SUFFIX)
        .or_else(|| rest.strip_suffix(LOG_EXTENSION))
        .unwrap_or(rest);

    run.record_job(pad_rank(raw_index), job_name.to_string());
    Ok(())
}

/// Derive the composite sort key from a `<index>_<step name>.txt` file
/// name: zero-padded index, then the step name with separators removed.
fn step_key(step_file: &str) -> ExtractResult<String> {
    let stem = step_file
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(step_file);
    let (raw_index, step_name) = stem.split_once('_').ok_or_else(|| {
        ExtractError::Naming(format!("step log entry without '_': {step_file}"))
    })?;

    let mut key = pad_rank(raw_index);
    key.push_str(&step_name.replace('_', ""));
    Ok(key)
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
