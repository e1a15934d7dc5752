pub mod targets;

pub use targets::{TargetDir, TargetGroup};

/// Extension of the translation files to check
pub const DEFAULT_EXTENSION: &str = ".properties";

/// Substring identifying the default locale file all others are compared to
pub const DEFAULT_LOCALE_MARKER: &str = "_de.";
