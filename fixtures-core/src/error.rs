use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Raised by guarded operations such as division by zero.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("Unknown routine: {0}")]
    UnknownRoutine(String),

    #[error("Invalid input for {routine}: {message}")]
    InvalidInput { routine: String, message: String },

    #[error("{routine}({n}) exceeds the configured limit of {limit}")]
    InputTooLarge {
        routine: String,
        n: i64,
        limit: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
