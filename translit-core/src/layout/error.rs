use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout not found: {0}")]
    NotFound(String),

    #[error("Layout '{layout}' is missing key '{key}'")]
    MissingKey { layout: String, key: &'static str },

    #[error("Layout '{layout}' has an invalid case_sensitive value: {value}")]
    BadCaseFlag { layout: String, value: String },

    #[error("Invalid table JSON: {0}")]
    BadTableJson(#[from] serde_json::Error),

    #[error("Invalid table entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
