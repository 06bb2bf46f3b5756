use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::error;

use crate::LOG_TARGET;
use crate::error::FileError;

/// Reads every line of `path`, line terminators included, in file order.
///
/// Bytes that are not valid UTF-8 are replaced line by line, so one stray
/// Latin-1 comment does not hide the rest of the file.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let path: &Path = path.as_ref();
    let file: File = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut lines: Vec<String> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        let read: usize = reader.read_until(b'\n', &mut buf).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

/// Like [`read_lines`], but a failure is logged and reported as an empty file.
///
/// Callers cannot tell an unreadable file from an empty one. Use [`read_lines`]
/// when the difference matters.
pub fn read_lines_or_empty(path: impl AsRef<Path>) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            error!(target: LOG_TARGET, "{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_test::traced_test;

    #[test]
    fn read_lines_keeps_terminators_and_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\nlast").unwrap();

        let lines: Vec<String> = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first\n", "second\n", "last"]);
    }

    #[test]
    fn read_lines_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.conf");

        let result = read_lines(&missing);
        assert!(matches!(result, Err(FileError::Open { .. })));
    }

    #[test]
    fn read_lines_or_empty_degrades_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines_or_empty(dir.path().join("nope.conf")).is_empty());
    }

    #[test]
    fn invalid_utf8_only_affects_its_own_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"pager = none\n# caf\xe9\nnodes = lb1\n").unwrap();

        let lines: Vec<String> = read_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "pager = none\n");
        assert_eq!(lines[1], "# caf\u{FFFD}\n");
        assert_eq!(lines[2], "nodes = lb1\n");
    }

    #[test]
    #[traced_test]
    fn read_failure_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines_or_empty(dir.path().join("missing.conf")).is_empty());
        assert!(logs_contain("unable to open"));
        assert!(logs_contain("missing.conf"));
    }

    #[test]
    fn empty_file_is_not_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(read_lines(file.path()).unwrap(), Vec::<String>::new());
    }
}
