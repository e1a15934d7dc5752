use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for translation check operations
#[derive(Debug, Error)]
pub enum CheckError {
    /// Discovery found no file with the requested extension
    #[error("Failed: No translation files were found in {dir} (extension '{extension}')\n\nTip: Check the target directory or the --extension option")]
    NoFilesFound { dir: PathBuf, extension: String },

    /// No file name contains the default locale marker
    #[error("Failed: No default translation file was found to compare with in {dir} (no file name contains '{marker}')\n\nTip: The default locale file is picked by the --default-marker substring")]
    DefaultFileNotFound { dir: PathBuf, marker: String },

    /// A translation file could not be read
    #[error("Failed to read translation file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation file could not be parsed
    #[error("Malformed translation file {file} at line {line}: {reason}")]
    Malformed {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Create a NoFilesFound error
    pub fn no_files_found(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::NoFilesFound {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Create a DefaultFileNotFound error
    pub fn default_file_not_found(dir: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self::DefaultFileNotFound {
            dir: dir.into(),
            marker: marker.into(),
        }
    }

    /// Create a Read error from a file path and the underlying IO error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a Malformed error
    pub fn malformed(file: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_files_found_error() {
        let err = CheckError::no_files_found("/work/backend", ".properties");
        let msg = err.to_string();
        assert!(msg.contains("No translation files were found"));
        assert!(msg.contains("/work/backend"));
        assert!(msg.contains(".properties"));
        assert!(msg.contains("Tip:"));
    }

    #[test]
    fn test_default_file_not_found_error() {
        let err = CheckError::default_file_not_found("/work/messages", "_de.");
        let msg = err.to_string();
        assert!(msg.contains("No default translation file"));
        assert!(msg.contains("_de."));
        assert!(msg.contains("/work/messages"));
    }

    #[test]
    fn test_read_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CheckError::read("messages_de.properties", io_err);
        assert!(err.to_string().contains("messages_de.properties"));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("denied"));
    }

    #[test]
    fn test_malformed_error() {
        let err = CheckError::malformed("messages_en.properties", 7, "Malformed \\uxxxx encoding");
        let msg = err.to_string();
        assert!(msg.contains("messages_en.properties"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\\uxxxx"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let check_err: CheckError = io_err.into();
        let msg = check_err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("pipe closed"));
    }
}
