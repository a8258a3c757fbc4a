pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::run_log::{
    extract_log, extract_log_from_bytes, extract_log_from_path, NO_LOGS_TEXT,
};
pub use types::errors::{ExtractError, ExtractResult};
