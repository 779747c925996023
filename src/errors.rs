use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan.
///
/// A duplicate whose `def` marker cannot be located in its source file is
/// not an error: the extractor warns on stderr and moves on.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is missing or a directory could not be traversed.
    #[error("cannot walk '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        source: ignore::Error,
    },

    /// A candidate file is not syntactically valid Python.
    #[error("invalid Python source in '{}' at line {line}, column {column}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// A source or output file could not be read or written.
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess { path: PathBuf, source: io::Error },

    /// The duplicate map could not be encoded for `--json` output.
    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_access_display_names_path() {
        let err = ScanError::FileAccess {
            path: PathBuf::from("src/app.py"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/app.py"), "message was: {msg}");
        assert!(msg.contains("denied"), "message was: {msg}");
    }

    #[test]
    fn parse_display_names_position() {
        let err = ScanError::Parse {
            path: PathBuf::from("bad.py"),
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid Python source in 'bad.py' at line 3, column 7"
        );
    }
}
