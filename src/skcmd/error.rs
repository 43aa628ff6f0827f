use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkcmdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SkcmdError>;
