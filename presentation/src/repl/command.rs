//! Slash-command parsing for the REPL

use quotegen_domain::{CreatorCategory, LengthFilter};

/// One line of REPL input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Pick a quote with the current filters (`/generate` or an empty line)
    Generate,
    Length(LengthFilter),
    Creator(CreatorCategory),
    /// Set the creator-name query; empty clears it
    Name(String),
    Add {
        text: String,
        creator: String,
        category: CreatorCategory,
    },
    List,
    Share,
    Remote,
    Filters,
    Theme,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line of input.
    ///
    /// Errors are messages ready to print.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplCommand::Generate);
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/generate" | "/g" => Ok(ReplCommand::Generate),
            "/length" | "/l" => arg
                .parse()
                .map(ReplCommand::Length)
                .map_err(|e: quotegen_domain::DomainError| e.to_string()),
            "/creator" | "/c" => arg
                .parse()
                .map(ReplCommand::Creator)
                .map_err(|e: quotegen_domain::DomainError| e.to_string()),
            "/name" | "/n" => Ok(ReplCommand::Name(arg.to_string())),
            "/add" => Self::parse_add(arg),
            "/list" | "/ls" => Ok(ReplCommand::List),
            "/share" | "/s" => Ok(ReplCommand::Share),
            "/remote" | "/r" => Ok(ReplCommand::Remote),
            "/filters" | "/f" => Ok(ReplCommand::Filters),
            "/theme" => Ok(ReplCommand::Theme),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            _ if cmd.starts_with('/') => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
            _ => Err("Commands start with '/'. Type /help for available commands".to_string()),
        }
    }

    /// `<text> | <creator> [| <category>]`, category defaulting to `all`.
    ///
    /// Blank text or creator fields are taken as they are.
    fn parse_add(arg: &str) -> Result<Self, String> {
        const USAGE: &str = "Usage: /add <text> | <creator> [| <category>]";

        let parts: Vec<&str> = arg.split('|').map(str::trim).collect();
        let (text, creator, category) = match parts.as_slice() {
            [text, creator] => (*text, *creator, CreatorCategory::All),
            [text, creator, category] => (
                *text,
                *creator,
                category
                    .parse()
                    .map_err(|e: quotegen_domain::DomainError| e.to_string())?,
            ),
            _ => return Err(USAGE.to_string()),
        };

        Ok(ReplCommand::Add {
            text: text.to_string(),
            creator: creator.to_string(),
            category,
        })
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /generate, /g, <enter>        - Pick a random quote
  /length <all|short|medium|large>
  /creator <all|poet|engineer|artist|other>
  /name <text>                  - Filter by creator name (empty clears)
  /add <text> | <creator> [| <category>]
  /list, /ls                    - List matching quotes
  /share, /s                    - Share the current quote
  /remote, /r                   - Fetch a Better Call Saul quote
  /filters, /f                  - Show current filters
  /theme                        - Toggle light/dark theme
  /help, /h, /?                 - Show this help
  /quit, /exit, /q              - Exit"
    }
}
