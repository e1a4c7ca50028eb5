use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to open file: {path}")]
    FileOpen { path: String },
    #[error("Unclosed {quote} in {path}:{line}")]
    UnterminatedQuote {
        quote: char,
        path: String,
        line: usize,
    },
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SceneError>;
