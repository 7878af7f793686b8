use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the line terminators in the file at `path`.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or a read
/// fails part-way through.
pub fn count_file_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    count_newlines(&mut reader).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Count `\n` bytes yielded by `reader`.
///
/// 末尾の改行なし行はカウントしない。`\r\n` は1行、単独の `\r` は行区切りとして扱わない。
///
/// # Errors
/// Propagates the first read error other than `Interrupted`.
pub fn count_newlines<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut lines = 0;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        lines += bytecount::count(buf, b'\n');

        let len = buf.len();
        reader.consume(len);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_counts_terminated_lines() {
        let mut cursor = Cursor::new("a\nb\nc\n");
        assert_eq!(count_newlines(&mut cursor).unwrap(), 3);
    }

    #[test]
    fn test_trailing_partial_line_not_counted() {
        let mut cursor = Cursor::new("a\nb\nunterminated");
        assert_eq!(count_newlines(&mut cursor).unwrap(), 2);
    }

    #[test]
    fn test_no_terminator_is_zero() {
        let mut cursor = Cursor::new("just one line");
        assert_eq!(count_newlines(&mut cursor).unwrap(), 0);
        let mut empty = Cursor::new("");
        assert_eq!(count_newlines(&mut empty).unwrap(), 0);
    }

    #[test]
    fn test_crlf_counts_once_and_lone_cr_is_ignored() {
        let mut cursor = Cursor::new("a\r\nb\r\nc\rd");
        assert_eq!(count_newlines(&mut cursor).unwrap(), 2);
    }

    #[test]
    fn test_counts_across_buffer_boundaries() {
        let content = "x\n".repeat(10_000);
        let mut reader = BufReader::with_capacity(7, Cursor::new(content));
        assert_eq!(count_newlines(&mut reader).unwrap(), 10_000);
    }

    #[test]
    fn test_non_utf8_content() {
        let mut cursor = Cursor::new(vec![0xff, b'\n', 0xfe, 0x00, b'\n']);
        assert_eq!(count_newlines(&mut cursor).unwrap(), 2);
    }

    /// Yields one chunk and then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::other("disk went away"));
            }
            self.served = true;
            let chunk = b"one\ntwo\n";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_read_error_mid_scan_is_reported() {
        let mut reader = BufReader::new(FailingReader { served: false });
        let err = count_newlines(&mut reader).unwrap_err();
        assert_eq!(err.to_string(), "disk went away");
    }

    #[test]
    fn test_count_file_lines_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "fn main() {{\n}}\n// trailing").unwrap();
        assert_eq!(count_file_lines(file.path()).unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.rs");
        match count_file_lines(&missing) {
            Err(EngineError::FileRead { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}
