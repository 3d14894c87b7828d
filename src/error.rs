use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a documentation run.
#[derive(Error, Debug)]
pub enum DocError {
    /// The export could not be read, or the document could not be written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the failing operation targeted.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The export is not a JSON array of export rows.
    #[error("Invalid schema export {}: {source}", path.display())]
    Parse {
        /// Export file that failed to parse.
        path: PathBuf,
        /// Deserializer error, carrying line and column.
        #[source]
        source: serde_json::Error,
    },

    /// A row used a category outside the known set while unknown categories are rejected.
    #[error("Unknown category '{category}' at row {index}")]
    UnknownCategory {
        /// Category string as it appeared in the export.
        category: String,
        /// Zero-based position of the row in the export.
        index: usize,
    },
}

impl DocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_names_the_path() {
        let err = DocError::io(
            "missing/schema_export.json",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("missing/schema_export.json"), "{message}");
        assert!(message.contains("not found"), "{message}");
    }

    #[test]
    fn unknown_category_display_names_category_and_row() {
        let err = DocError::UnknownCategory {
            category: "Views".to_string(),
            index: 3,
        };
        assert_eq!(err.to_string(), "Unknown category 'Views' at row 3");
    }
}
