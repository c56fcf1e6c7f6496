use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chunk size must be at least 1 byte")]
    ZeroChunkSize,

    #[error("line {line}: invalid value {token:?}, expected an integer in 0..=65535")]
    Parse { line: usize, token: String },

    #[error("line {line}: record holds {len} values, at most 65535 fit")]
    RecordTooLong { line: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
