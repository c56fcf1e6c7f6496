use crate::error::{Error, Result};

/// Parsed records and their lengths.
///
/// Parsing is off unless asked for with [`Docs::parsing`]; a non-parsing `Docs`
/// ignores whatever it is handed and both collections stay empty.
#[derive(Debug, Default)]
pub struct Docs {
    pub docs: Vec<Vec<u16>>,
    pub doc_lens: Vec<u16>,
    parse: bool,
    lines: usize,
}

impl Docs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parsing() -> Self {
        Self {
            parse: true,
            ..Self::default()
        }
    }

    /// Takes one record, with or without its trailing newline.
    pub fn push_line(&mut self, line: &[u8]) -> Result<()> {
        if !self.parse {
            return Ok(());
        }
        self.lines += 1;
        let line_no = self.lines;
        let doc = parse_record(line).map_err(|token| Error::Parse {
            line: line_no,
            token,
        })?;
        if doc.is_empty() {
            return Ok(());
        }
        let len = u16::try_from(doc.len()).map_err(|_| Error::RecordTooLong {
            line: line_no,
            len: doc.len(),
        })?;
        self.docs.push(doc);
        self.doc_lens.push(len);
        Ok(())
    }

    /// Feeds every line of a block that ends on a line boundary (or at end of file).
    pub fn push_block(&mut self, block: &[u8]) -> Result<()> {
        if !self.parse {
            return Ok(());
        }
        let mut start = 0;
        for end in memchr::memchr_iter(b'\n', block) {
            self.push_line(&block[start..end])?;
            start = end + 1;
        }
        if start < block.len() {
            self.push_line(&block[start..])?;
        }
        Ok(())
    }
}

/// Splits a record on `,` and parses each non-empty token as a `u16`.
/// On failure the offending token is returned.
fn parse_record(line: &[u8]) -> std::result::Result<Vec<u16>, String> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.split(|&b| b == b',')
        .map(<[u8]>::trim_ascii)
        .filter(|token| !token.is_empty())
        .map(|token| {
            std::str::from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .ok_or_else(|| String::from_utf8_lossy(token).into_owned())
        })
        .collect()
}
