use thiserror::Error;

/// Fatal failure while reconstructing a run's log document.
///
/// Both variants abort the whole extraction call; no partial document is
/// ever returned.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to decode log archive: {0}")]
    Decode(String),
    #[error("Entry name violates the log naming convention: {0}")]
    Naming(String),
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(error: zip::result::ZipError) -> Self {
        ExtractError::Decode(error.to_string())
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(error: std::io::Error) -> Self {
        ExtractError::Decode(error.to_string())
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
