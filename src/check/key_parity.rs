use crate::error::{CheckError, Result};
use crate::parse::TranslationFile;
use std::path::Path;
use tracing::debug;

use super::{CheckReport, Failure, Validator};

/// Requires every file to declare exactly the keys of the default file
///
/// Files are only compared against the default file, never with each other.
#[derive(Debug)]
pub struct KeyParityValidator {
    default_marker: String,
}

impl Default for KeyParityValidator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOCALE_MARKER)
    }
}

impl KeyParityValidator {
    pub fn new(default_marker: impl Into<String>) -> Self {
        Self {
            default_marker: default_marker.into(),
        }
    }

    /// First file whose name contains the default marker
    pub fn default_file<'a>(&self, files: &'a [String], dir: &Path) -> Result<&'a str> {
        files
            .iter()
            .find(|name| name.contains(self.default_marker.as_str()))
            .map(String::as_str)
            .ok_or_else(|| CheckError::default_file_not_found(dir, &self.default_marker))
    }
}

impl Validator for KeyParityValidator {
    fn name(&self) -> &'static str {
        "key parity"
    }

    fn validate(&self, files: &[String], dir: &Path, report: &mut CheckReport) -> Result<()> {

        let default_name = self.default_file(files, dir)?;
        let default_file = TranslationFile::load(dir, default_name)?;
        let expected = default_file.sorted_keys();
        debug!(default_file = %default_name, keys = expected.len(), "comparing against default file");

        // The default file is compared with itself as well
        for name in files {
            let file = TranslationFile::load(dir, name)?;
            let actual = file.sorted_keys();
            if actual != expected {
                debug!(
                    file = %name,
                    missing = ?difference(&expected, &actual),
                    extra = ?difference(&actual, &expected),
                    "key sets differ"
                );
                report.failures.push(Failure::KeysDiffer {
                    file: name.clone(),
                    default_file: default_name.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Keys of sorted `left` that are absent from sorted `right`
fn difference<'a>(left: &[&'a str], right: &[&str]) -> Vec<&'a str> {
    left.iter()
        .copied()
        .filter(|key| right.binary_search(key).is_err())
        .collect()
}
