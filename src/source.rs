use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, TfidfError};

/// Supplies the raw text of a named source as a sequence of lines.
pub trait SourceReader {
    fn read_lines(&self, label: &str) -> Result<Vec<String>>;
}

/// Reads sources from the local filesystem, treating each label as a path.
///
/// Non-empty regular files are memory-mapped. Pipes, devices and `/proc`
/// entries report a length of 0 regardless of content, so they are read
/// through to EOF instead. Text is decoded as UTF-8, with invalid sequences
/// replaced rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

impl FileSource {
    fn read_path(path: &Path) -> io::Result<Vec<String>> {
        let mut file = File::open(path)?;
        let metadata = file.metadata()?;

        if metadata.is_dir() {
            return Err(io::Error::other("is a directory"));
        }
        if !(metadata.is_file() && metadata.len() > 0) {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            return Ok(split_lines(&bytes));
        }

        // SAFETY: the map is read-only and dropped before this function returns.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(split_lines(&mmap))
    }
}

impl SourceReader for FileSource {
    fn read_lines(&self, label: &str) -> Result<Vec<String>> {
        Self::read_path(Path::new(label)).map_err(|e| TfidfError::unavailable(label, e))
    }
}

/// In-memory sources keyed by label. Unknown labels are reported as not found.
impl SourceReader for std::collections::HashMap<String, String> {
    fn read_lines(&self, label: &str) -> Result<Vec<String>> {
        self.get(label)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                TfidfError::unavailable(label, io::Error::new(io::ErrorKind::NotFound, "no such source"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_file_source_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first line\r\nsecond line\nthird").unwrap();

        let lines = FileSource.read_lines(file.path().to_str().unwrap()).unwrap();
        assert_eq!(lines, vec!["first line", "second line", "third"]);
    }

    #[test]
    fn test_file_source_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let lines = FileSource.read_lines(file.path().to_str().unwrap()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let label = missing.to_str().unwrap();

        match FileSource.read_lines(label) {
            Err(TfidfError::SourceUnavailable { label: l, source }) => {
                assert_eq!(l, label);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_file_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource.read_lines(dir.path().to_str().unwrap());
        assert!(matches!(result, Err(TfidfError::SourceUnavailable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_source_reads_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("pipe");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        let writer_path = fifo.clone();
        let writer = std::thread::spawn(move || {
            let mut pipe = std::fs::OpenOptions::new()
                .write(true)
                .open(writer_path)
                .unwrap();
            pipe.write_all(b"apple banana\ncherry\n").unwrap();
        });

        let lines = FileSource.read_lines(fifo.to_str().unwrap()).unwrap();
        writer.join().unwrap();
        assert_eq!(lines, vec!["apple banana", "cherry"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_source_reads_zero_length_proc_file() {
        // procfs reports st_size 0 but always has content.
        let lines = FileSource.read_lines("/proc/self/status").unwrap();
        assert!(lines.iter().any(|line| line.starts_with("Name:")));
    }

    #[test]
    fn test_in_memory_source() {
        let mut sources = HashMap::new();
        sources.insert("a".to_string(), "x y\nz".to_string());

        assert_eq!(sources.read_lines("a").unwrap(), vec!["x y", "z"]);
        assert!(sources.read_lines("b").is_err());
    }
}
