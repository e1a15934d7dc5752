//! The three translation checks.
//!
//! Every validator reloads the files it needs, so the checks are independent
//! of each other and may run in any order.

pub mod empty_values;
pub mod key_parity;
pub mod sorted_keys;

pub use empty_values::EmptyValuesValidator;
pub use key_parity::KeyParityValidator;
pub use sorted_keys::SortedKeysValidator;

use crate::error::Result;
use std::fmt;
use std::path::Path;

/// A single rule violation found by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Keys of `file` are not in ordinal ascending order
    NotSorted { file: String },
    /// Key set of `file` differs from the default file's
    KeysDiffer { file: String, default_file: String },
    /// `key` in `file` maps to the empty string
    EmptyValue { file: String, key: String },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSorted { file } => {
                write!(f, "Failed: {} file is not sorted alphabetically", file)
            }
            Self::KeysDiffer { file, default_file } => write!(
                f,
                "Failed: {} properties are not equal to {} properties",
                file, default_file
            ),
            Self::EmptyValue { file, key } => write!(
                f,
                "Failed: {} properties are empty for the {} property",
                file, key
            ),
        }
    }
}

/// Outcome of one validator over one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub check: &'static str,
    pub failures: Vec<Failure>,
}

impl CheckReport {
    pub fn new(check: &'static str) -> Self {
        Self {
            check,
            failures: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A rule applied to the translation files of one directory
pub trait Validator {
    fn name(&self) -> &'static str;

    /// Check `files` (names relative to `dir`), recording rule violations in
    /// `report` as they are found. On `Err` the failures recorded before the
    /// error are still in `report`.
    fn validate(&self, files: &[String], dir: &Path, report: &mut CheckReport) -> Result<()>;

    /// Run the check into a fresh report
    fn run(&self, files: &[String], dir: &Path) -> Result<CheckReport> {
        let mut report = CheckReport::new(self.name());
        self.validate(files, dir, &mut report)?;
        Ok(report)
    }
}
