//! Progress reporting for remote fetches

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quotegen_application::FetchProgressNotifier;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a remote fetch is in flight
pub struct FetchSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl FetchSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for FetchSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for FetchSpinner {
    fn on_fetch_start(&self, source: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Fetching");
        pb.set_message(source.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_fetch_complete(&self, success: bool) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Line-based progress for places where a spinner would fight over the
/// terminal: the REPL prompt, or stderr that is not a terminal.
pub struct SimpleFetchProgress {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl SimpleFetchProgress {
    /// Report to stderr
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn emit(&self, line: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Default for SimpleFetchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for SimpleFetchProgress {
    fn on_fetch_start(&self, source: &str) {
        self.emit(format!("{} Fetching {}", "->".cyan(), source.bold()));
    }

    fn on_fetch_complete(&self, success: bool) {
        if success {
            self.emit(format!("  {} done", "v".green()));
        } else {
            self.emit(format!("  {} failed", "x".red()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = FetchSpinner::new();
        spinner.on_fetch_start("https://example.test/api");
        assert!(spinner.bar.lock().unwrap().is_some());

        spinner.on_fetch_complete(true);
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let spinner = FetchSpinner::default();
        spinner.on_fetch_complete(false);
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_simple_progress_writes_lines() {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let progress = SimpleFetchProgress::with_writer(Box::new(buffer.clone()));

        progress.on_fetch_start("https://example.test/api");
        progress.on_fetch_complete(false);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "-> Fetching https://example.test/api\n  x failed\n"
        );
    }
}
