//! REPL (Read-Eval-Print Loop) for the quote screens

use crate::config::{ReplConfig, Theme};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SimpleFetchProgress;
use crate::repl::command::ReplCommand;
use colored::Colorize;
use quotegen_application::{
    FetchOutcome, FetchProgressNotifier, FetchRemoteQuoteUseCase, NoFetchProgress, QuoteSession,
    RemoteQuoteSession, RemoteQuoteSource, ShareQuoteUseCase, SharePort,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive quote REPL
///
/// Owns both screens. `/remote` dispatches the fetch onto the runtime and
/// returns at once; outcomes come back over a channel that the loop drains
/// after every command and before every prompt, so local commands stay
/// available while a request is outstanding.
pub struct QuoteRepl<S: RemoteQuoteSource + 'static, P: SharePort + 'static> {
    session: QuoteSession,
    remote: RemoteQuoteSession,
    fetch: FetchRemoteQuoteUseCase<S>,
    share: ShareQuoteUseCase<P>,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    progress: Box<dyn FetchProgressNotifier>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<S: RemoteQuoteSource + 'static, P: SharePort + 'static> QuoteRepl<S, P> {
    pub fn new(
        session: QuoteSession,
        fetch: FetchRemoteQuoteUseCase<S>,
        share: ShareQuoteUseCase<P>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session,
            remote: RemoteQuoteSession::new(),
            fetch,
            share,
            formatter: ConsoleFormatter::default(),
            config: ReplConfig::default(),
            progress: Box::new(SimpleFetchProgress::new()),
            tx,
            rx,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.formatter.set_theme(theme);
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the line-based fetch progress (shown when `show_progress` is on)
    pub fn with_progress(mut self, progress: Box<dyn FetchProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quote".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            self.drain_fetches();

            let signal = editor.read_line(&prompt)?;
            match signal {
                Signal::Success(line) => {
                    let command = match ReplCommand::parse(&line) {
                        Ok(command) => command,
                        Err(message) => {
                            println!("{}", message.yellow());
                            continue;
                        }
                    };
                    if self.handle_command(command).await {
                        break;
                    }
                    self.drain_fetches();
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Quote Generator - Interactive       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} quotes in the catalog. Press enter for a random one.",
            self.session.store().len()
        );
        println!();
        println!("{}", ReplCommand::help_text());
        println!();
    }

    /// Handle one command. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Generate => {
                // Errors land on the session's message line
                let _ = self.session.generate(&mut rand::thread_rng());
                println!("{}", self.formatter.format_session(&self.session));
            }
            ReplCommand::Length(length) => {
                self.session.set_length_filter(length);
                self.print_filters();
            }
            ReplCommand::Creator(creator) => {
                self.session.set_creator_filter(creator);
                self.print_filters();
            }
            ReplCommand::Name(query) => {
                self.session.set_name_query(query);
                self.print_filters();
            }
            ReplCommand::Add {
                text,
                creator,
                category,
            } => {
                let added = self.session.add_quote(text, category, creator);
                println!("{} {}", "Added:".green().bold(), added);
                self.print_filters();
            }
            ReplCommand::List => {
                let filter = self.session.filter().clone();
                let outcome = self.session.filtered();
                println!("{}", self.formatter.format_list(&outcome.quotes, &filter));
            }
            ReplCommand::Share => self.share_current(),
            ReplCommand::Remote => self.fetch_remote(),
            ReplCommand::Filters => self.print_filters(),
            ReplCommand::Theme => {
                let theme = self.formatter.theme().toggled();
                self.formatter.set_theme(theme);
                println!("Theme: {}", if theme.is_dark() { "dark" } else { "light" });
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                println!();
            }
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
        }
        false
    }

    fn print_filters(&self) {
        println!("{}", self.formatter.format_filters(self.session.filter()));
        if let Some(notice) = self.session.name_notice() {
            println!("{}", notice.message().red());
        }
    }

    fn share_current(&mut self) {
        let request = match self.session.share_request() {
            Ok(request) => request,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        };
        match self.share.execute(&request) {
            Ok(target) => println!("{} {}", "Shared via".green(), target),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    fn fetch_progress(&self) -> &dyn FetchProgressNotifier {
        if self.config.show_progress {
            self.progress.as_ref()
        } else {
            &NoFetchProgress
        }
    }

    /// Dispatch a fetch without waiting for it
    fn fetch_remote(&mut self) {
        self.fetch_progress()
            .on_fetch_start(&self.fetch.describe_source());
        self.fetch.dispatch(self.tx.clone());
        self.remote.mark_dispatched();
        println!(
            "{}",
            "The quote will show up at the next prompt once it arrives.".dimmed()
        );
    }

    /// Apply outcomes that arrived since the last drain and show the
    /// remote screen if anything changed
    fn drain_fetches(&mut self) {
        let mut applied = false;
        while let Ok(outcome) = self.rx.try_recv() {
            debug!("Applying fetch outcome");
            self.fetch_progress().on_fetch_complete(outcome.is_ok());
            self.remote.apply(outcome);
            applied = true;
        }
        if applied {
            println!("{}", self.formatter.format_remote(&self.remote));
        }
    }
}
