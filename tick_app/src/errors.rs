use std::io::Write;

use thiserror::Error;
use tick_http::HttpError;
use tracing::error;

#[derive(Error, Debug)]
pub enum TickError {
    #[error("Transport error: {0}")]
    Transport(#[source] HttpError),

    #[error("Decode error: {0}")]
    Decode(#[source] HttpError),

    #[error("Failed to load currency directory: {0}")]
    DirectoryLoad(#[source] Box<TickError>),

    #[error("Symbol '{0}' not found")]
    SymbolNotFound(String),

    #[error("No symbols left to try")]
    AllSymbolsExhausted,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HttpError> for TickError {
    fn from(err: HttpError) -> Self {
        if err.is_decode() {
            TickError::Decode(err)
        } else {
            TickError::Transport(err)
        }
    }
}

impl TickError {
    /// Log the error and write it to `out` regardless of the log filter
    pub fn report<W: Write>(&self, out: &mut W) {
        error!("{self}");
        let _ = writeln!(out, "tick: {self}");
        let _ = out.flush();
    }
}

pub type Result<T> = std::result::Result<T, TickError>;
