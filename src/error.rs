use std::fmt;

/// Custom error type for analysis operations
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// A source cell could not be read as a number
    TypeError(String),
    /// Source rows are ragged, or the table has no rows
    ShapeError(String),
    /// A measurement violates the value range (e.g. negative reading)
    ValueError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::TypeError(msg) => write!(f, "TypeError: {}", msg),
            AnalysisError::ShapeError(msg) => write!(f, "ShapeError: {}", msg),
            AnalysisError::ValueError(msg) => write!(f, "ValueError: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
