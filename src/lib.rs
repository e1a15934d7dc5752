pub mod check;
pub mod config;
pub mod error;
pub mod output;
pub mod parse;
pub mod search;

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

// Re-export commonly used types
pub use check::{
    CheckReport, EmptyValuesValidator, Failure, KeyParityValidator, SortedKeysValidator,
    Validator,
};
pub use config::{TargetDir, TargetGroup, DEFAULT_EXTENSION, DEFAULT_LOCALE_MARKER};
pub use error::{CheckError, Result};
pub use output::ReportFormatter;
pub use parse::{OrderedProperties, PropertiesParser, TranslationFile};
pub use search::FileSearcher;

/// Settings for checking one translation directory
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub extension: String,
    pub default_marker: String,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            default_marker: DEFAULT_LOCALE_MARKER.to_string(),
        }
    }
}

impl CheckSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_default_marker(mut self, marker: impl Into<String>) -> Self {
        self.default_marker = marker.into();
        self
    }

    /// Validators in report order
    pub fn validators(&self) -> Vec<Box<dyn Validator>> {
        vec![
            Box::new(SortedKeysValidator::new()),
            Box::new(KeyParityValidator::new(self.default_marker.clone())),
            Box::new(EmptyValuesValidator::new()),
        ]
    }
}

/// Check every translation file of `dir`
///
/// Discovers the files, then runs the sort, parity and empty-value checks in
/// that order. Each check's failures are written to `out` as soon as the
/// check finishes, or stops on an error; the OK line is written when all of
/// them pass.
///
/// Returns `Ok(true)` when every check passed, `Ok(false)` when at least one
/// rule was violated. Any discovery or loading error aborts the remaining
/// checks and is returned to the caller.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_translation_check(
    dir: &Path,
    settings: &CheckSettings,
    formatter: &ReportFormatter,
    out: &mut dyn Write,
) -> Result<bool> {
    let dir = std::path::absolute(dir).map_err(|e| CheckError::read(dir, e))?;

    let files = FileSearcher::new(dir.clone())
        .extension(settings.extension.as_str())
        .search()?;

    let mut all_passed = true;
    for validator in settings.validators() {
        let mut report = CheckReport::new(validator.name());
        let outcome = validator.validate(&files, &dir, &mut report);
        debug!(
            check = report.check,
            failures = report.failures.len(),
            aborted = outcome.is_err(),
            "check finished"
        );
        // Failures found before an error are still reported
        for failure in &report.failures {
            writeln!(out, "{}", formatter.failure(failure))?;
        }
        outcome?;
        all_passed &= report.passed();
    }

    if all_passed {
        writeln!(out, "{}", formatter.ok())?;
    }
    info!(dir = %dir.display(), passed = all_passed, "translation check complete");

    Ok(all_passed)
}
