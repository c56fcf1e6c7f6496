use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::info;

use crate::{
    docs::Docs,
    error::{Error, Result},
    ReadStats,
};

pub fn read_file_lines(path: &Path, docs: &mut Docs) -> Result<ReadStats> {
    let f = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let stats = read_lines(BufReader::new(f), docs)?;
    info!(path = %path.display(), lines = stats.reads, bytes = stats.bytes, "line read done");
    Ok(stats)
}

/// Reads newline-delimited records until end of input, handing each to `docs`.
/// The reader is consumed and dropped on every return path.
pub fn read_lines(mut reader: impl BufRead, docs: &mut Docs) -> Result<ReadStats> {
    let mut stats = ReadStats::default();
    // bytes, not String: records are not required to be UTF-8 unless parsed
    let mut line = Vec::with_capacity(256);
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        stats.reads += 1;
        stats.bytes += n as u64;
        docs.push_line(&line)?;
    }
    Ok(stats)
}
