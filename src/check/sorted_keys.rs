use crate::error::Result;
use crate::parse::TranslationFile;
use std::path::Path;
use tracing::debug;

use super::{CheckReport, Failure, Validator};

/// Requires the keys of every file to be in ordinal ascending order
#[derive(Debug, Default)]
pub struct SortedKeysValidator;

impl SortedKeysValidator {
    pub fn new() -> Self {
        Self
    }
}

/// First adjacent pair that breaks ordinal order. The empty string is the
/// implicit predecessor of the first key.
pub fn first_unsorted_pair<'a>(keys: &[&'a str]) -> Option<(&'a str, &'a str)> {
    let mut previous = "";
    for &current in keys {
        if current < previous {
            return Some((previous, current));
        }
        previous = current;
    }
    None
}

impl Validator for SortedKeysValidator {
    fn name(&self) -> &'static str {
        "sorted keys"
    }

    fn validate(&self, files: &[String], dir: &Path, report: &mut CheckReport) -> Result<()> {

        for name in files {
            let file = TranslationFile::load(dir, name)?;
            // Only the first violation per file is reported
            if let Some((previous, current)) = first_unsorted_pair(&file.keys()) {
                debug!(file = %file.path().display(), previous, current, "keys out of order");
                report.failures.push(Failure::NotSorted { file: name.clone() });
            }
        }

        Ok(())
    }
}
