use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("Terminal is {cols}x{rows}, needs to be at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SnakeError>;

impl From<toml::de::Error> for SnakeError {
    fn from(err: toml::de::Error) -> Self {
        SnakeError::Config(err.to_string())
    }
}
