//! Error types for the roster store and persistence adapter.
//!
//! None of these are fatal: validation and lookup failures leave the store
//! untouched, and persistence failures leave the in-memory roster untouched.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected grade entry. The roster is never mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// The grade text could not be parsed as a number.
    #[error("invalid input {input:?}: please enter a numeric grade")]
    NotNumeric { input: String },

    /// The grade is a number but lies outside [0, 100].
    #[error("grade must be between 0 and 100, got {0}")]
    OutOfRange(f64),

    /// The student name is empty after trimming.
    #[error("student name must not be empty")]
    EmptyStudentName,

    /// The subject name is empty after trimming.
    #[error("subject name must not be empty")]
    EmptySubjectName,
}

/// A query against a student the roster does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("student not found: {0}")]
    UnknownStudent(String),
}

/// Failure to write a roster to disk.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The roster could not be encoded as JSON.
    #[error("failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Creating, writing or flushing the file failed.
    #[error("error saving data to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to read a roster from disk, in the order the checks are made.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("file '{}' is empty", path.display())]
    Empty { path: PathBuf },

    /// The file is not JSON, or not a student -> subject -> grade object.
    #[error("invalid format in file {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error loading data from file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Returns `true` if the file is missing or has zero length.
    pub fn is_absent(&self) -> bool {
        matches!(self, LoadError::NotFound { .. } | LoadError::Empty { .. })
    }

    /// The path the load was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Empty { path }
            | LoadError::InvalidFormat { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_messages_name_the_condition() {
        let missing = LoadError::NotFound {
            path: "grades.json".into(),
        };
        assert_eq!(missing.to_string(), "file 'grades.json' does not exist");
        assert!(missing.is_absent());

        let empty = LoadError::Empty {
            path: "grades.json".into(),
        };
        assert_eq!(empty.to_string(), "file 'grades.json' is empty");
        assert!(empty.is_absent());
    }

    #[test]
    fn invalid_format_carries_parser_detail() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let detail = source.to_string();
        let err = LoadError::InvalidFormat {
            path: "bad.json".into(),
            source,
        };
        assert!(!err.is_absent());
        assert!(err.to_string().contains("invalid format"));
        assert!(err.to_string().contains(&detail));
        assert_eq!(err.path(), std::path::Path::new("bad.json"));
    }

    #[test]
    fn grade_error_display() {
        assert_eq!(
            GradeError::OutOfRange(101.0).to_string(),
            "grade must be between 0 and 100, got 101"
        );
        assert!(GradeError::NotNumeric {
            input: "abc".into()
        }
        .to_string()
        .contains("numeric grade"));
    }
}
