//! Line counting with permissive UTF-8 decoding.
//!
//! Files are streamed character by character through [`BufReadCharsExt`].
//! Byte sequences that are not valid UTF-8 are dropped, so a file with a few
//! stray Latin-1 bytes still counts normally. A line is any record ended by
//! `\n`, `\r\n`, `\r` or end of file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use utf8_chars::BufReadCharsExt;

use crate::error::SplitlocError;
use crate::Result;

/// Open `path` for reading, refusing directories up front.
pub(crate) fn open_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::other("is a directory"));
    }
    Ok(file)
}

/// Iterate the characters of `reader`, skipping invalid UTF-8.
///
/// Real I/O errors are still yielded.
fn lossy_chars<R: BufRead>(reader: &mut R) -> impl Iterator<Item = io::Result<char>> + '_ {
    reader
        .chars()
        .filter(|c| !matches!(c, Err(e) if e.kind() == io::ErrorKind::InvalidData))
}

/// Read all of `reader` into a string, dropping invalid UTF-8.
pub(crate) fn decode_lossy<R: BufRead>(mut reader: R) -> io::Result<String> {
    lossy_chars(&mut reader).collect()
}

/// Split `text` into lines ended by `\n`, `\r\n` or `\r`.
///
/// Like [`str::lines`], a final terminator does not start an empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(['\n', '\r']) {
            Some(end) => {
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], &rest[end + skip..])
            }
            None => (rest, ""),
        };
        rest = tail;
        Some(line)
    })
}

/// Count the lines of any reader.
pub fn count_reader<R: Read>(reader: R) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0;
    // Whether characters were seen since the last terminator.
    let mut open_line = false;
    let mut after_cr = false;

    for c in lossy_chars(&mut reader) {
        let c = c?;
        if c == '\n' && after_cr {
            after_cr = false;
            continue;
        }
        match c {
            '\n' | '\r' => {
                lines += 1;
                open_line = false;
                after_cr = c == '\r';
            }
            _ => {
                open_line = true;
                after_cr = false;
            }
        }
    }

    if open_line {
        lines += 1;
    }
    Ok(lines)
}

/// Count the lines of a file.
pub fn count_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file_read = |source| SplitlocError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = open_file(path).map_err(file_read)?;
    count_reader(file).map_err(file_read)
}

/// The one place where counting failures are forgiven: every error counts as
/// zero lines.
pub fn lines_or_zero(result: Result<u64>) -> u64 {
    match result {
        Ok(lines) => lines,
        Err(e) => {
            log::debug!("counting as empty: {e}");
            0
        }
    }
}

/// Count the lines of a file, treating unreadable files as empty.
pub fn count_lines_lossy(path: impl AsRef<Path>) -> u64 {
    lines_or_zero(count_lines(path))
}
