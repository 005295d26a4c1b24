//! Whole-resource reads.
//!
//! The parser and renderer borrow every text span from a buffer that holds a
//! complete resource: the source document, or the theme stylesheet. This
//! module produces those buffers. `-` names standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Location that reads from standard input instead of a file.
pub const STDIN: &str = "-";

const STDIN_NAME: &str = "<stdin>";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("while trying to open '{name}': {source}")]
    Open { name: String, source: io::Error },
    #[error("while trying to read '{name}': {source}")]
    Read { name: String, source: io::Error },
}

impl SourceError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SourceError::Open { .. } => 3,
            SourceError::Read { .. } => 4,
        }
    }
}

/// The complete contents of one resource plus the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    name: String,
    text: String,
}

impl SourceBuffer {
    /// Read a file, or standard input when `location` is `-`.
    ///
    /// The file handle is released before this returns, on success and on
    /// error alike. Content must be valid UTF-8; anything else is a read error.
    pub fn read(location: &Path) -> Result<Self, SourceError> {
        if location == Path::new(STDIN) {
            return Self::from_reader(STDIN_NAME, io::stdin().lock());
        }

        let name = location.display().to_string();
        let file = File::open(location).map_err(|source| SourceError::Open {
            name: name.clone(),
            source,
        })?;
        Self::from_reader(name, file)
    }

    /// Drain `reader` into a buffer reported as `name`.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, SourceError> {
        let name = name.into();
        let mut text = String::new();
        if let Err(source) = reader.read_to_string(&mut text) {
            return Err(SourceError::Read { name, source });
        }
        log::debug!("read {} bytes from {name}", text.len());
        Ok(Self { name, text })
    }

    /// Wrap text that is already in memory.
    pub fn from_string(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device went away"))
        }
    }

    #[test]
    fn reads_whole_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.1");
        fs::write(&path, ".SH NAME\nmsg\n").unwrap();

        let buffer = SourceBuffer::read(&path).unwrap();
        assert_eq!(buffer.text(), ".SH NAME\nmsg\n");
        assert_eq!(buffer.name(), path.display().to_string());
    }

    #[test]
    fn missing_file_is_open_error() {
        let tmp = TempDir::new().unwrap();
        let err = SourceBuffer::read(&tmp.path().join("missing.1")).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("missing.1"));
    }

    #[test]
    fn failed_read_is_read_error() {
        let err = SourceBuffer::from_reader("broken", FailingReader).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("device went away"));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let err = SourceBuffer::from_reader("latin1", &[0x66, 0x6f, 0xff][..]).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[test]
    fn from_string_keeps_name_and_text() {
        let buffer = SourceBuffer::from_string("inline", "text");
        assert_eq!(buffer.name(), "inline");
        assert_eq!(buffer.text(), "text");
    }
}
