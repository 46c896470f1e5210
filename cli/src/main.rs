//! CLI entrypoint for quotegen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;
use quotegen_application::{
    ActivityLogger, FetchProgressNotifier, FetchRemoteQuoteUseCase, NoActivityLogger,
    NoFetchProgress, QuoteSession, SessionConfig, ShareQuoteUseCase,
};
use quotegen_domain::Severity;
use quotegen_infrastructure::{
    ConfigLoader, FileConfig, HttpRemoteQuoteSource, JsonlActivityLogger, SystemShareSheet,
};
use quotegen_presentation::{
    Cli, ConsoleFormatter, FetchSpinner, OutputFormat, QuoteRepl, ReplConfig, SimpleFetchProgress,
    Theme,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting quotegen");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let theme = if cli.dark {
        Theme::Dark
    } else {
        Theme::from_dark_mode(config.display.dark_mode)
    };
    let output = cli
        .output
        .or(config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    let formatter = ConsoleFormatter::new(theme);

    // === Dependency Injection ===
    let activity: Arc<dyn ActivityLogger> = match config
        .log
        .activity_file
        .as_deref()
        .and_then(JsonlActivityLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoActivityLogger),
    };

    let source = Arc::new(HttpRemoteQuoteSource::new(config.remote.endpoint.clone()));
    let fetch = FetchRemoteQuoteUseCase::new(source).with_logger(Arc::clone(&activity));

    let (targets, _) = config.share.parse_targets();
    let (excluded, _) = config.share.parse_excluded_targets();
    let share = ShareQuoteUseCase::new(Arc::new(SystemShareSheet::new(targets)))
        .with_logger(Arc::clone(&activity));

    let mut session = QuoteSession::seeded()
        .with_config(SessionConfig::default().with_excluded_share_targets(excluded))
        .with_logger(Arc::clone(&activity));
    session.set_filter(cli.filter());

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.clone(),
        };
        QuoteRepl::new(session, fetch, share)
            .with_theme(theme)
            .with_config(repl_config)
            .run()
            .await?;
        return Ok(());
    }

    // Remote quote
    if cli.remote {
        let silent = cli.quiet || output == OutputFormat::Json;
        let progress: Box<dyn FetchProgressNotifier> = if silent {
            Box::new(NoFetchProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(FetchSpinner::new())
        } else {
            Box::new(SimpleFetchProgress::new())
        };

        let quote = fetch.execute_with_progress(progress.as_ref()).await?;
        match output {
            OutputFormat::Text => println!("{}", formatter.format_remote_quote(&quote)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_remote_json(&quote)),
        }
        return Ok(());
    }

    // List matching quotes
    if cli.list {
        let filter = session.filter().clone();
        let outcome = session.filtered();
        match output {
            OutputFormat::Text => {
                println!("{}", formatter.format_list(&outcome.quotes, &filter));
                if let Some(notice) = outcome.notice {
                    eprintln!("{}", notice.message().red());
                }
            }
            OutputFormat::Json => {
                println!("{}", ConsoleFormatter::format_list_json(&outcome.quotes))
            }
        }
        return Ok(());
    }

    // Generate one quote
    let quote = session.generate(&mut rand::thread_rng())?.clone();
    match output {
        OutputFormat::Text => println!("{}", formatter.format_session(&session)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_quote_json(&quote)),
    }

    if cli.share {
        let request = session.share_request()?;
        let target = share.execute(&request)?;
        if !cli.quiet {
            eprintln!("{} {}", "Shared via".green(), target);
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Verbosity picks the level unless `RUST_LOG` is set. With a log file the
/// returned guard must outlive the program's logging.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn report_config_issues(config: &FileConfig) {
    for issue in config.validate() {
        let label = match issue.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        eprintln!("{} {}", label, issue.message);
    }
}
