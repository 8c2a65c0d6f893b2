//! I/O utilities for reading records from files

use crate::error::{Abort, Result};
use crate::field::Record;
use crate::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Buffer capacity used for file-backed reads
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Open a file for reading through a [`DEFAULT_BUFFER_SIZE`] buffer
pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Read every record of the file at `path`, split on `delimiter`.
///
/// # Arguments
/// * `path` - File to read
/// * `delimiter` - Field delimiter; `\r` and `\n` are rejected
/// * `next` - Called with the 1-based line number and each record
///
/// # Errors
/// Fails with [`crate::Error::Io`] if the file cannot be opened, otherwise
/// as [`Reader::read`] does.
pub fn read_file<P, F>(path: P, delimiter: u8, next: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(usize, &mut Record<'_>) -> Result<(), Abort>,
{
    let input = open(path)?;
    Reader::with_delimiter(delimiter).read(input, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mary,jones,35").unwrap();
        writeln!(file, "bill,anderson,40").unwrap();
        file.flush().unwrap();

        let mut rows = Vec::new();
        read_file(file.path(), b',', |i, record| {
            assert_eq!(record.len(), 3);
            rows.push((i, record.field(0).to_string(), record.field(2).as_u32()));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            rows,
            [(1, "mary".to_string(), 35), (2, "bill".to_string(), 40)]
        );
    }

    #[test]
    fn test_read_file_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let res = read_file(dir.path().join("NONEXISTENT_FILE.TXT"), b',', |_, _| Ok(()));
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn test_open_buffer_capacity() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let reader = open(file.path()).unwrap();
        assert_eq!(reader.capacity(), DEFAULT_BUFFER_SIZE);
    }
}
