use crate::error::Result;
use crate::parse::TranslationFile;
use std::path::Path;

use super::{CheckReport, Failure, Validator};

/// Rejects keys whose value is the empty string
#[derive(Debug, Default)]
pub struct EmptyValuesValidator;

impl EmptyValuesValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for EmptyValuesValidator {
    fn name(&self) -> &'static str {
        "empty values"
    }

    fn validate(&self, files: &[String], dir: &Path, report: &mut CheckReport) -> Result<()> {

        for name in files {
            let file = TranslationFile::load(dir, name)?;
            for key in file.empty_keys() {
                report.failures.push(Failure::EmptyValue {
                    file: name.clone(),
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_non_empty_values_pass() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("messages_de.properties"), "a=1\nb=zwei\n").unwrap();

        let files = vec!["messages_de.properties".to_string()];
        let report = EmptyValuesValidator::new().run(&files, dir.path()).unwrap();
        assert!(report.passed());
    }

    #[test]
    fn test_empty_value_names_file_and_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("messages_de.properties"), "a=1\nb=\n").unwrap();

        let files = vec!["messages_de.properties".to_string()];
        let report = EmptyValuesValidator::new().run(&files, dir.path()).unwrap();
        assert_eq!(report.failures.len(), 1);
        let msg = report.failures[0].to_string();
        assert!(msg.contains("messages_de.properties"));
        assert!(msg.contains("the b property"));
    }

    #[test]
    fn test_all_empty_values_across_files_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("messages_de.properties"), "a=\nb=\nc=3\n").unwrap();
        fs::write(dir.path().join("messages_en.properties"), "a=1\nb=2\nc=\n").unwrap();

        let files = vec![
            "messages_de.properties".to_string(),
            "messages_en.properties".to_string(),
        ];
        let report = EmptyValuesValidator::new().run(&files, dir.path()).unwrap();
        assert_eq!(
            report.failures,
            vec![
                Failure::EmptyValue {
                    file: "messages_de.properties".into(),
                    key: "a".into()
                },
                Failure::EmptyValue {
                    file: "messages_de.properties".into(),
                    key: "b".into()
                },
                Failure::EmptyValue {
                    file: "messages_en.properties".into(),
                    key: "c".into()
                },
            ]
        );
    }

    #[test]
    fn test_whitespace_only_value_is_empty_after_parsing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("messages_de.properties"), "a=   \nb = \\u0020\n").unwrap();

        let files = vec!["messages_de.properties".to_string()];
        let report = EmptyValuesValidator::new().run(&files, dir.path()).unwrap();
        // An escaped space is a real value
        assert_eq!(
            report.failures,
            vec![Failure::EmptyValue {
                file: "messages_de.properties".into(),
                key: "a".into()
            }]
        );
    }
}
