//! Streaming reader for `.strb` files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::strb::filter::normalize;

/// Opaque header skipped before anything is interpreted.
pub const HEADER_LEN: usize = 8;

/// Marks the end of the binary block and the start of the text records.
pub const SENTINEL: &[u8; 5] = b"null\0";

/// Ordered, single-pass sequence of text records from one string table.
///
/// Construction consumes the header and the binary block up to and including the
/// sentinel, so a reader that exists is positioned on the first text record.
#[derive(Debug)]
pub struct StringTableReader<R> {
    inner: R,
    origin: PathBuf,
    chunk: Vec<u8>,
    done: bool,
}

impl StringTableReader<BufReader<File>> {
    /// Open a table on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::Missing {
                path: path.to_path_buf(),
            },
            _ => LoadError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::new(BufReader::new(file), path)
    }
}

impl<R: BufRead> StringTableReader<R> {
    /// Wrap any buffered byte source. `origin` is only used to name the table in errors.
    pub fn new(mut inner: R, origin: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let origin = origin.into();
        skip_header(&mut inner, &origin)?;
        seek_sentinel(&mut inner, &origin)?;
        Ok(StringTableReader {
            inner,
            origin,
            chunk: Vec::new(),
            done: false,
        })
    }
}

fn skip_header<R: BufRead>(inner: &mut R, origin: &Path) -> Result<(), LoadError> {
    let mut header = [0u8; HEADER_LEN];
    inner.read_exact(&mut header).map_err(|err| {
        LoadError::format(origin, format!("unable to skip the {HEADER_LEN}-byte header: {err}"))
    })
}

fn seek_sentinel<R: BufRead>(inner: &mut R, origin: &Path) -> Result<(), LoadError> {
    let mut chunk = Vec::new();
    loop {
        chunk.clear();
        let read = inner.read_until(0, &mut chunk).map_err(|err| {
            LoadError::format(origin, format!("read failed before the text records: {err}"))
        })?;
        if read == 0 || chunk.last() != Some(&0) {
            return Err(LoadError::format(
                origin,
                "reached end of file before the `null` sentinel",
            ));
        }
        if chunk.as_slice() == SENTINEL {
            return Ok(());
        }
    }
}

impl<R: BufRead> Iterator for StringTableReader<R> {
    type Item = Result<String, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.chunk.clear();
        match self.inner.read_until(0, &mut self.chunk) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                // An unterminated tail is not a record.
                if self.chunk.pop() != Some(0) {
                    self.done = true;
                    return None;
                }
                Some(Ok(normalize(&String::from_utf8_lossy(&self.chunk))))
            }
            Err(err) => {
                self.done = true;
                Some(Err(LoadError::format(
                    &self.origin,
                    format!("read failed in the text records: {err}"),
                )))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for StringTableReader<R> {}

/// Read a whole table into memory, in file order.
pub fn read_string_table(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let records = StringTableReader::open(path)?.collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(path = %path.display(), records = records.len(), "read string table");
    Ok(records)
}
