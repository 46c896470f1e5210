//! Presentation layer for quotegen
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{ReplConfig, Theme};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{FetchSpinner, SimpleFetchProgress};
pub use repl::QuoteRepl;
