use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config line {line}")]
    Parse { line: usize },
    #[error("Invalid value for {section}.{key}")]
    InvalidValue { section: String, key: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
