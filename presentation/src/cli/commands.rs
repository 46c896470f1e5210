//! CLI command definitions

use clap::{Parser, ValueEnum};
use quotegen_domain::{CreatorCategory, LengthFilter, QuoteFilter};
use std::path::PathBuf;

/// Output format for generated quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<quotegen_domain::OutputFormat> for OutputFormat {
    fn from(format: quotegen_domain::OutputFormat) -> Self {
        match format {
            quotegen_domain::OutputFormat::Text => OutputFormat::Text,
            quotegen_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for quotegen
#[derive(Parser, Debug)]
#[command(name = "quotegen")]
#[command(author, version, about = "Inspirational quotes - filter, generate and share")]
#[command(long_about = r#"
quotegen picks a random quote from a small catalog, optionally narrowed by
length, creator category and creator name. It can also fetch a quote from
the Better Call Saul quote API.

Length buckets: short (up to 20 chars), medium (21-50), large (over 50).
Creator categories: all, poet, engineer, artist, other.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quotegen.toml     Project-level config
3. ~/.config/quotegen/config.toml   Global config

Example:
  quotegen
  quotegen --creator artist
  quotegen --name mandela --share
  quotegen --remote
  quotegen -i
"#)]
pub struct Cli {
    /// Length bucket to draw from
    #[arg(short, long, value_name = "LENGTH", default_value = "all")]
    pub length: LengthFilter,

    /// Creator category to draw from
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    pub creator: CreatorCategory,

    /// Case-insensitive substring of the creator's name
    #[arg(short, long, value_name = "TEXT")]
    pub name: Option<String>,

    /// List the matching quotes instead of picking one
    #[arg(long, conflicts_with_all = ["remote", "share"])]
    pub list: bool,

    /// Share the generated quote (clipboard, falling back to stdout)
    #[arg(long, conflicts_with = "remote")]
    pub share: bool,

    /// Fetch a quote from the remote quote API instead
    #[arg(short, long)]
    pub remote: bool,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Use the dark color theme (overrides the config file)
    #[arg(long)]
    pub dark: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Filter predicates given on the command line
    pub fn filter(&self) -> QuoteFilter {
        QuoteFilter::new()
            .with_length(self.length)
            .with_creator(self.creator)
            .with_name_query(self.name.clone().unwrap_or_default())
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
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quotegen"]).unwrap();
        assert!(cli.filter().is_unconstrained());
        assert!(!cli.interactive);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_filter_flags() {
        let cli = Cli::try_parse_from([
            "quotegen", "--length", "medium", "-c", "artist", "-n", "Lennon",
        ])
        .unwrap();
        let filter = cli.filter();
        assert_eq!(filter.length, LengthFilter::Medium);
        assert_eq!(filter.creator, CreatorCategory::Artist);
        assert_eq!(filter.name_query, "Lennon");
    }

    #[test]
    fn test_invalid_category_rejected() {
        assert!(Cli::try_parse_from(["quotegen", "--creator", "painter"]).is_err());
    }

    #[test]
    fn test_list_conflicts_with_remote() {
        assert!(Cli::try_parse_from(["quotegen", "--list", "--remote"]).is_err());
    }

    #[test]
    fn test_share_conflicts_with_remote() {
        assert!(Cli::try_parse_from(["quotegen", "--remote", "--share"]).is_err());
        assert!(Cli::try_parse_from(["quotegen", "--share"]).is_ok());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["quotegen", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
