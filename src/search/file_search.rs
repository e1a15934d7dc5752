use crate::error::{CheckError, Result};
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Finds the translation files of a single directory by extension
pub struct FileSearcher {
    base_dir: PathBuf,
    extension: String,
}

impl FileSearcher {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            extension: crate::config::DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// List file names ending with the extension, in directory enumeration
    /// order. Subdirectories are not entered.
    pub fn search(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let walker = WalkDir::new(&self.base_dir).min_depth(1).max_depth(1);
        for entry in walker {
            let entry = entry.map_err(|e| {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                CheckError::read(&self.base_dir, source)
            })?;

            // Follows symlinks; dangling links are skipped
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if file_name.ends_with(self.extension.as_str()) {
                names.push(file_name.into_owned());
            }
        }

        if names.is_empty() {
            return Err(CheckError::no_files_found(&self.base_dir, &self.extension));
        }

        debug!(dir = %self.base_dir.display(), files = ?names, "discovered translation files");
        Ok(names)
    }
}
