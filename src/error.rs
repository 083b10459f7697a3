use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),

    #[error("NO_DEBUG_SYMBOLS: Binary has no DWARF debug info. Source locations will not be attached.")]
    NoDebugSymbols,

    #[error("BINARY_PARSE_FAILED: Failed to parse binary: {0}")]
    BinaryParse(String),

    #[error("DWARF_ERROR: {0}")]
    Dwarf(String),

    #[error("INVALID_DOCUMENT: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
