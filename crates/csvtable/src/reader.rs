use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::warn;
use validate::{validate_air_quality, ValidationError};

use crate::format::{parse_line, Row, HEADER};
use crate::TableError;

/// What a single content line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A well-formed row with acceptable readings.
    Row(Row),
    /// The line is structurally malformed and can be skipped.
    Skip(ValidationError),
    /// The line parsed but its readings are not valid AQI data.
    Fatal(ValidationError),
}

/// Classifies one content line.
///
/// Structural failures from [`parse_line`] become [`RowOutcome::Skip`]. A
/// row that parses but fails `validate_air_quality` becomes
/// [`RowOutcome::Fatal`].
pub fn classify_line(line: &str) -> RowOutcome {
    match parse_line(line) {
        Err(e) => RowOutcome::Skip(e),
        Ok(row) => match validate_air_quality(&row.air_quality) {
            Ok(_) => RowOutcome::Row(row),
            Err(e) => RowOutcome::Fatal(e),
        },
    }
}

/// Sequential table reader.
///
/// The header is consumed on construction. Iterating yields
/// `(line_number, outcome)` for every non-blank line after it; line numbers
/// are 1-based and count the header as line 1.
///
/// A content line that is not valid UTF-8 is reported as a skippable
/// [`RowOutcome::Skip`], never as an I/O error.
///
/// Generic over any `Read` implementor so tests can feed in-memory buffers.
pub struct TableReader<R: Read> {
    rdr: BufReader<R>,
    /// Reusable line buffer.
    buf: Vec<u8>,
    line_no: usize,
}

impl TableReader<File> {
    /// Opens a table file and reads its header.
    ///
    /// Returns [`TableError::NotFound`] if the file is absent and
    /// [`TableError::MissingHeader`] if it is empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TableReader<File>, TableError> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TableError::NotFound(path.to_path_buf()),
            _ => TableError::Io(e),
        })?;
        TableReader::from_reader(f)
    }
}

impl<R: Read> TableReader<R> {
    /// Wraps any reader and consumes the header line.
    ///
    /// A header that differs from [`HEADER`] is logged but accepted.
    pub fn from_reader(reader: R) -> Result<Self, TableError> {
        let mut rdr = BufReader::new(reader);
        let mut buf = Vec::with_capacity(256);
        if read_line(&mut rdr, &mut buf)? == 0 {
            return Err(TableError::MissingHeader);
        }
        let header = String::from_utf8_lossy(&buf);
        if header.trim_end_matches(['\r', ',']) != HEADER {
            warn!(found = %header, "unexpected table header");
        }
        Ok(Self {
            rdr,
            buf,
            line_no: 1,
        })
    }
}

/// Reads one line into `buf` without its `\n`. Returns the raw byte count,
/// 0 at end of input.
fn read_line<R: BufRead>(rdr: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    buf.clear();
    let n = rdr.read_until(b'\n', buf)?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(n)
}

impl<R: Read> Iterator for TableReader<R> {
    type Item = Result<(usize, RowOutcome), TableError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_line(&mut self.rdr, &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(TableError::Io(e))),
            }
            self.line_no += 1;

            let outcome = match std::str::from_utf8(&self.buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => classify_line(line),
                Err(_) => RowOutcome::Skip(ValidationError::InvalidRecord(
                    String::from_utf8_lossy(&self.buf).into_owned(),
                )),
            };
            return Some(Ok((self.line_no, outcome)));
        }
    }
}
