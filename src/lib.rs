//! Two ways of pulling a file of comma-separated `u16` records into memory:
//! one line at a time through a [`BufRead`](std::io::BufRead), or in fixed-size
//! chunks that are cut back to the last complete line before the next read.

pub mod chunk_reader;
pub mod docs;
pub mod error;
pub mod line_reader;

pub use chunk_reader::{read_chunks, read_file_chunks, realign, Realigned, CHUNK_SIZE};
pub use docs::Docs;
pub use error::{Error, Result};
pub use line_reader::{read_file_lines, read_lines};

/// What a reader did with the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    /// Line reads for the line reader, non-empty chunk reads for the chunk reader.
    pub reads: usize,
    pub bytes: u64,
}
