//! Console output formatter for quotes

use crate::config::Theme;
use colored::{ColoredString, Colorize};
use quotegen_application::{QuoteSession, RemoteQuoteSession};
use quotegen_domain::{Quote, QuoteFilter, RemoteQuote};

/// Formats quotes and screen state for console display
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    theme: Theme,
}

impl ConsoleFormatter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// A single quote with its creator
    pub fn format_quote(&self, quote: &Quote) -> String {
        format!(
            "{}\n{} {} {}\n",
            self.quote_text(quote.text()),
            "-".dimmed(),
            self.accent(quote.creator_name()),
            format!("({})", quote.category()).dimmed()
        )
    }

    /// The local quote screen: current quote, message line and name notice
    pub fn format_session(&self, session: &QuoteSession) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quote Generator"));
        output.push('\n');

        match session.current() {
            Some(quote) => output.push_str(&self.format_quote(quote)),
            None => {
                output.push_str(&format!("{}\n", "No Quote Generated".dimmed().italic()));
            }
        }

        if let Some(message) = session.message() {
            output.push_str(&format!("\n{}\n", message.red()));
        }

        if let Some(notice) = session.name_notice() {
            output.push_str(&format!("{}\n", notice.message().red()));
        }

        output
    }

    /// The remote quote screen
    pub fn format_remote(&self, remote: &RemoteQuoteSession) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Better Call Saul"));
        output.push('\n');

        match remote.current() {
            Some(quote) => output.push_str(&self.format_remote_quote(quote)),
            None => output.push_str(&format!(
                "{}\n",
                "No quote fetched yet. Type /remote to fetch one.".dimmed()
            )),
        }

        if let Some(error) = remote.error() {
            output.push_str(&format!("\n{}\n", error.red()));
        }

        output
    }

    pub fn format_remote_quote(&self, quote: &RemoteQuote) -> String {
        format!(
            "{}\n{} {}\n",
            self.quote_text(&quote.quote),
            "-".dimmed(),
            self.accent(&quote.author)
        )
    }

    /// Every quote that passes `filter`, numbered in catalog order
    pub fn format_list(&self, quotes: &[&Quote], filter: &QuoteFilter) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "Filters:".cyan().bold(),
            filter
        ));

        if quotes.is_empty() {
            output.push_str(&format!("{}\n", "(no matching quotes)".dimmed()));
            return output;
        }

        for (i, quote) in quotes.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {} {} {}\n",
                i + 1,
                quote.text(),
                "-".dimmed(),
                self.accent(quote.creator_name())
            ));
        }

        output.push_str(&format!("\n{} {}\n", quotes.len(), "quote(s)".dimmed()));
        output
    }

    /// Current filter settings
    pub fn format_filters(&self, filter: &QuoteFilter) -> String {
        let name = if filter.name_query.is_empty() {
            "(any)".dimmed().to_string()
        } else {
            format!("\"{}\"", filter.name_query)
        };
        format!(
            "{} {}\n{} {}\n{} {}\n",
            "Length: ".cyan().bold(),
            filter.length,
            "Creator:".cyan().bold(),
            filter.creator,
            "Name:   ".cyan().bold(),
            name
        )
    }

    /// Format a local quote as JSON
    pub fn format_quote_json(quote: &Quote) -> String {
        serde_json::to_string_pretty(quote).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a remote quote as JSON
    pub fn format_remote_json(quote: &RemoteQuote) -> String {
        serde_json::to_string_pretty(quote).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a list of quotes as a JSON array
    pub fn format_list_json(quotes: &[&Quote]) -> String {
        serde_json::to_string_pretty(quotes).unwrap_or_else(|_| "[]".to_string())
    }

    fn quote_text(&self, text: &str) -> ColoredString {
        let quoted = format!("\u{201c}{}\u{201d}", text);
        match self.theme {
            Theme::Light => quoted.bold(),
            Theme::Dark => quoted.bright_white().bold(),
        }
    }

    fn accent(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.blue(),
            Theme::Dark => text.bright_yellow(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
