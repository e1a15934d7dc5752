use clap::Parser;
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tcheck::{
    run_translation_check, CheckSettings, ReportFormatter, TargetGroup, DEFAULT_EXTENSION,
    DEFAULT_LOCALE_MARKER,
};

/// Translation Check - Verify .properties translation files are sorted, complete and non-empty
#[derive(Parser, Debug)]
#[command(name = "tcheck")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Translation group to check ("backend" or "keycloak"); anything else does nothing
    #[arg(value_name = "GROUP")]
    group: String,

    /// Directory the group's relative paths are resolved from (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// File extension of the translation files
    #[arg(long, default_value = DEFAULT_EXTENSION, value_parser = validate_non_empty)]
    extension: String,

    /// Substring identifying the default locale file
    #[arg(long, default_value = DEFAULT_LOCALE_MARKER, value_parser = validate_non_empty)]
    default_marker: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Reject empty option values
fn validate_non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("value cannot be empty".to_string());
    }
    Ok(s.to_string())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "tcheck=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(group) = TargetGroup::from_name(&cli.group) else {
        debug!(group = %cli.group, "unknown translation group, nothing to check");
        return;
    };

    let root = cli
        .root
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let use_color = !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(use_color);
    let formatter = ReportFormatter::with_color(use_color);

    let settings = CheckSettings::new()
        .with_extension(cli.extension)
        .with_default_marker(cli.default_marker);

    let mut all_passed = true;
    for target in group.directories() {
        println!("{}", formatter.start_banner(target.label));

        let dir = target.resolve(&root);
        match run_translation_check(&dir, &settings, &formatter, &mut io::stdout()) {
            Ok(passed) => all_passed &= passed,
            Err(e) => {
                all_passed = false;
                let err = anyhow::Error::new(e).context(format!(
                    "checking {} translations in {}",
                    target.label,
                    dir.display()
                ));
                eprintln!("{}", formatter.error(&err));
            }
        }

        println!("{}", formatter.end_banner(target.label));
    }

    if !all_passed {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_non_empty() {
        assert_eq!(validate_non_empty(".properties").unwrap(), ".properties");
        assert!(validate_non_empty("").is_err());
        assert!(validate_non_empty("   ").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tcheck", "backend"]);
        assert_eq!(cli.group, "backend");
        assert_eq!(cli.extension, ".properties");
        assert_eq!(cli.default_marker, "_de.");
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tcheck",
            "keycloak",
            "--root",
            "/repo/tools",
            "--extension",
            ".lang",
            "--default-marker",
            "_en.",
            "--no-color",
            "-v",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("/repo/tools")));
        assert_eq!(cli.extension, ".lang");
        assert_eq!(cli.default_marker, "_en.");
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}
