use std::path::PathBuf;

use clap::Parser;
use readfile_bench::CHUNK_SIZE;

#[derive(Parser, Debug)]
#[command(author, version, about = "Time reading a file of comma-separated u16 records", long_about = None)]
pub struct Args {
    /// Input file, one record per line
    pub path: PathBuf,

    /// `line` reads line by line; any other value reads in fixed-size chunks
    pub method: String,

    /// Chunk size in bytes for the chunked reader
    #[arg(long, default_value_t = CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Parse records into u16 values instead of discarding them
    #[arg(long)]
    pub parse: bool,
}

impl Args {
    pub fn method(&self) -> Method {
        Method::from(self.method.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Line,
    Chunk,
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "line" => Method::Line,
            _ => Method::Chunk,
        }
    }
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.replace('_', "").parse::<usize>() {
        Ok(0) => Err("chunk size must be at least 1 byte".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
