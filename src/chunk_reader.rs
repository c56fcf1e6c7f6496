use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::{
    docs::Docs,
    error::{Error, Result},
    ReadStats,
};

pub const CHUNK_SIZE: usize = 256 * 1024;

/// A chunk cut back to its last complete line.
#[derive(Debug, PartialEq, Eq)]
pub struct Realigned<'a> {
    pub usable: &'a [u8],
    /// Bytes after the last newline; the cursor moves back this far so the
    /// next read starts on a fresh line.
    pub rewind: usize,
}

/// Trims `chunk` (the bytes actually read) to end right after its last `\n`.
/// The final chunk of a file and a chunk without any newline are kept whole.
pub fn realign(chunk: &[u8], is_final: bool) -> Realigned<'_> {
    if is_final {
        return Realigned {
            usable: chunk,
            rewind: 0,
        };
    }
    match memchr::memrchr(b'\n', chunk) {
        Some(idx) => Realigned {
            usable: &chunk[..=idx],
            rewind: chunk.len() - idx - 1,
        },
        None => Realigned {
            usable: chunk,
            rewind: 0,
        },
    }
}

pub fn read_file_chunks(path: &Path, chunk_size: usize, docs: &mut Docs) -> Result<ReadStats> {
    let f = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let stats = read_chunks(f, chunk_size, docs)?;
    info!(path = %path.display(), chunks = stats.reads, bytes = stats.bytes, "chunk read done");
    Ok(stats)
}

/// Reads `chunk_size` blocks, realigning each one that did not hit end of file
/// so no line is split between two reads. A read of zero bytes ends the loop;
/// it only counts as a chunk when it is the first read, so an empty input is
/// one chunk.
pub fn read_chunks(
    mut reader: impl Read + Seek,
    chunk_size: usize,
    docs: &mut Docs,
) -> Result<ReadStats> {
    if chunk_size == 0 {
        return Err(Error::ZeroChunkSize);
    }
    let mut stats = ReadStats::default();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = fill(&mut reader, &mut buf)?;
        if n == 0 {
            if stats.reads == 0 {
                stats.reads = 1;
            }
            break;
        }
        let is_final = n < chunk_size;
        let Realigned { usable, rewind } = realign(&buf[..n], is_final);
        if !is_final && usable.last() != Some(&b'\n') {
            warn!(chunk = stats.reads, chunk_size, "no newline in chunk, a line spans reads");
        }
        if rewind > 0 {
            // rewind < n <= chunk_size, and a Vec never holds more than isize::MAX bytes
            reader.seek(SeekFrom::Current(-(rewind as i64)))?;
        }
        debug!(chunk = stats.reads, read = n, kept = usable.len(), rewind, "chunk");
        stats.reads += 1;
        stats.bytes += usable.len() as u64;
        docs.push_block(usable)?;
    }
    Ok(stats)
}

/// Reads until `buf` is full or the reader is exhausted.
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
