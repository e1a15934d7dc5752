use crate::check::Failure;
use colored::Colorize;

pub const OK_MESSAGE: &str = "OK: all translations are correct";

/// Renders the human-readable report lines
pub struct ReportFormatter {
    colored: bool,
}

impl ReportFormatter {
    /// Create a plain-text formatter
    pub fn new() -> Self {
        Self { colored: false }
    }

    /// Create a formatter that highlights `Failed:` and `OK:` tags
    pub fn with_color(colored: bool) -> Self {
        Self { colored }
    }

    /// Banner printed before a directory is checked, preceded by a blank line
    pub fn start_banner(&self, label: &str) -> String {
        format!("\n-- Start checking {} translations --", label)
    }

    pub fn end_banner(&self, label: &str) -> String {
        format!("-- End checking {} translations --", label)
    }

    pub fn failure(&self, failure: &Failure) -> String {
        let line = failure.to_string();
        if self.colored {
            if let Some(rest) = line.strip_prefix("Failed:") {
                return format!("{}{}", "Failed:".red().bold(), rest);
            }
        }
        line
    }

    pub fn ok(&self) -> String {
        if self.colored {
            if let Some(rest) = OK_MESSAGE.strip_prefix("OK:") {
                return format!("{}{}", "OK:".green().bold(), rest);
            }
        }
        OK_MESSAGE.to_string()
    }

    /// Fatal error with its full cause chain (and backtrace when captured)
    pub fn error(&self, err: &anyhow::Error) -> String {
        let tag = if self.colored {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        format!("{} {:?}", tag, err)
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[test]
    fn test_banners() {
        let formatter = ReportFormatter::new();
        assert_eq!(
            formatter.start_banner("backend"),
            "\n-- Start checking backend translations --"
        );
        assert_eq!(
            formatter.end_banner("Keycloak login"),
            "-- End checking Keycloak login translations --"
        );
    }

    #[test]
    fn test_plain_failure_and_ok() {
        let formatter = ReportFormatter::new();
        let failure = Failure::NotSorted {
            file: "messages_de.properties".into(),
        };
        assert_eq!(
            formatter.failure(&failure),
            "Failed: messages_de.properties file is not sorted alphabetically"
        );
        assert_eq!(formatter.ok(), OK_MESSAGE);
    }

    #[test]
    fn test_colored_output_keeps_message_text() {
        colored::control::set_override(true);
        let formatter = ReportFormatter::with_color(true);
        let failure = Failure::EmptyValue {
            file: "messages_en.properties".into(),
            key: "title".into(),
        };
        let line = formatter.failure(&failure);
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("messages_en.properties properties are empty for the title property"));
        assert!(formatter.ok().contains("all translations are correct"));
        colored::control::unset_override();
    }

    #[test]
    fn test_error_includes_cause_chain() {
        let formatter = ReportFormatter::new();
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(CheckError::read("messages_de.properties", io_err))
            .context("checking backend translations");
        let text = formatter.error(&err);
        assert!(text.starts_with("Error: checking backend translations"));
        assert!(text.contains("Caused by"));
        assert!(text.contains("messages_de.properties"));
        assert!(text.contains("gone"));
    }
}
