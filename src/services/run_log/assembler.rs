use super::types::RunStructure;

/// Rendered when the archive parsed cleanly but held no job summaries.
/// Distinct from the placeholders the calling UI substitutes while a run
/// is unselected, missing, or still executing.
pub const NO_LOGS_TEXT: &str = "No logs available";

/// Render the collected run into one document.
///
/// Jobs appear in ascending job-index order, steps in ascending step-key
/// order, blocks joined by single newlines with no trailing separator.
/// Pure: identical input always yields byte-identical output.
pub fn render_document(run: &RunStructure) -> String {
    if run.is_empty() {
        return NO_LOGS_TEXT.to_string();
    }

    let job_blocks: Vec<String> = run
        .jobs_in_order()
        .map(|job_name| {
            let step_blocks: Vec<String> = run
                .steps_of(job_name)
                .map(|steps| {
                    steps
                        .iter()
                        .map(|(key, text)| format!("==== Step: {key} ====\n{text}"))
                        .collect()
                })
                .unwrap_or_default();
            format!("==== Job: {job_name} ====\n{}", step_blocks.join("\n"))
        })
        .collect();

    job_blocks.join("\n")
}

#[cfg(test)]
#[path = "tests/assembler_tests.rs"]
mod tests;
