use shades::{ConfigError, DictionaryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed message: {0}")]
    Message(#[source] serde_json::Error),

    #[error("Malformed selection: {0}")]
    Selection(#[source] serde_json::Error),

    #[error("Could not encode reply: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Unknown log level: {0}")]
    LogLevel(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
