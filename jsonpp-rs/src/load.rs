//! Reading documents from disk.
//!
//! The parser itself only sees byte buffers. This module is the thin layer
//! that turns a path into a buffer, refusing files that do not carry a
//! `.json` extension.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::json::{parse_with_limits, Limits, Value};

/// Errors from loading a document file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The path does not end in `.json`.
    #[error("{} is not a .json file", .0.display())]
    NotJson(PathBuf),

    /// The file was read but does not parse.
    #[error("{}: {source}", .path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Parser error
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// The parse error, if loading failed while parsing.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Returns true if `path` has a `.json` extension (case-insensitive).
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a `.json` file into memory.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    if !is_json_path(path) {
        warn!(path = %path.display(), "refusing file without .json extension");
        return Err(LoadError::NotJson(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    Ok(bytes)
}

/// Read and parse a `.json` file.
pub fn parse_file(path: impl AsRef<Path>, limits: Limits) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let bytes = read_file(path)?;

    match parse_with_limits(&bytes, limits) {
        Ok(value) => {
            debug!(path = %path.display(), kind = value.type_name(), "parsed document");
            Ok(value)
        }
        Err(source) => {
            warn!(
                path = %path.display(),
                code = source.code().name(),
                line = source.line(),
                column = source.column(),
                "rejected document"
            );
            Err(LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_extension_check() {
        assert!(is_json_path(Path::new("config.json")));
        assert!(is_json_path(Path::new("dir/CONFIG.JSON")));
        assert!(!is_json_path(Path::new("config.txt")));
        assert!(!is_json_path(Path::new("json")));
    }

    #[test]
    fn test_parse_file() {
        let file = write_temp(".json", "{ /* settings */ \"debug\": true }");
        let value = parse_file(file.path(), Limits::default()).unwrap();
        assert_eq!(value.member("debug"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_not_json_extension() {
        let file = write_temp(".txt", "{}");
        let err = read_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotJson(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_file("/nonexistent/dir/file.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_parse_failure_keeps_location() {
        let file = write_temp(".json", "{\n\"a\": }");
        let err = parse_file(file.path(), Limits::default()).unwrap_err();
        let parse = err.parse_error().unwrap();
        assert_eq!(parse.code(), &ErrorCode::E100_UnexpectedToken);
        assert_eq!(parse.line(), 2);
    }
}
