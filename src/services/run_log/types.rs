use std::collections::{BTreeMap, HashMap};

/// Width of the zero-padded sort keys. Lexical order equals numeric
/// order for ranks up to 9999.
const KEY_WIDTH: usize = 4;

/// Left-pad a numeric rank so string sort matches numeric sort.
pub fn pad_rank(raw: &str) -> String {
    format!("{:0>width$}", raw, width = KEY_WIDTH)
}

/// Everything the walker collects from one archive. Owned by a single
/// extraction call and dropped after rendering.
#[derive(Debug, Default)]
pub struct RunStructure {
    /// Padded job index -> job name. First occurrence wins.
    jobs: BTreeMap<String, String>,
    /// Job name -> (step key -> step text). Last write wins per key.
    steps: HashMap<String, BTreeMap<String, String>>,
}

impl RunStructure {
    /// Register a job under its padded index unless the index is already
    /// taken. First-wins keeps the accepted job-1 summary from being
    /// displaced by the redundant artifact sharing its index.
    pub fn record_job(&mut self, index: String, name: String) {
        self.jobs.entry(index).or_insert(name);
    }

    /// Store a step's text, replacing any earlier payload at the same
    /// composite key.
    pub fn record_step(&mut self, job: &str, key: String, text: String) {
        self.steps
            .entry(job.to_string())
            .or_default()
            .insert(key, text);
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Job names in ascending job-index order.
    pub fn jobs_in_order(&self) -> impl Iterator<Item = &String> {
        self.jobs.values()
    }

    /// Steps of one job in ascending step-key order, if the job has any.
    pub fn steps_of(&self, job: &str) -> Option<&BTreeMap<String, String>> {
        self.steps.get(job)
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
