// Sun Oct 18 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedianError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Sequence is not a rotated ascending sequence (second descent at index {index})")]
    NotRotated { index: usize },
    #[error("Invalid value '{token}' at position {position}")]
    Parse { token: String, position: usize },
}

impl MedianError {
    pub fn empty() -> Self {
        MedianError::InvalidInput("sequence is empty".to_string())
    }
}
