//! Share sheet backed by the local system

use super::clipboard::ClipboardCommand;
use quotegen_application::ports::share_target::{ShareError, SharePort};
use quotegen_domain::{ShareRequest, ShareTarget};
use std::io::Write;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Offers the configured targets in order and uses the first one that is
/// allowed by the request and works on this host.
///
/// Only `clipboard` and `stdout` can be served here; other targets are
/// skipped.
pub struct SystemShareSheet {
    targets: Vec<ShareTarget>,
    clipboard: Option<ClipboardCommand>,
    stdout: Mutex<Box<dyn Write + Send>>,
}

impl SystemShareSheet {
    /// Share sheet with auto-detected clipboard and real stdout
    pub fn new(targets: Vec<ShareTarget>) -> Self {
        Self {
            targets,
            clipboard: ClipboardCommand::detect(),
            stdout: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Override clipboard detection
    pub fn with_clipboard(mut self, clipboard: Option<ClipboardCommand>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Redirect the `stdout` target
    pub fn with_stdout(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.stdout = Mutex::new(writer);
        self
    }

    fn share_to(&self, target: ShareTarget, text: &str) -> Option<Result<(), String>> {
        match target {
            ShareTarget::Clipboard => self
                .clipboard
                .as_ref()
                .map(|c| c.copy(text).map_err(|e| e.to_string())),
            ShareTarget::Stdout => {
                let mut writer = match self.stdout.lock() {
                    Ok(w) => w,
                    Err(_) => return Some(Err("stdout writer poisoned".to_string())),
                };
                Some(
                    writeln!(writer, "{}", text)
                        .and_then(|_| writer.flush())
                        .map_err(|e| e.to_string()),
                )
            }
            ShareTarget::AddToReadingList
            | ShareTarget::OpenInEbookViewer
            | ShareTarget::MarkupAsPdf => None,
        }
    }
}

impl SharePort for SystemShareSheet {
    fn share(&self, request: &ShareRequest) -> Result<ShareTarget, ShareError> {
        let mut last_error = None;

        for &target in &self.targets {
            if !request.allows(target) {
                debug!("Share target {} excluded", target);
                continue;
            }
            match self.share_to(target, &request.text) {
                None => debug!("Share target {} not available here", target),
                Some(Ok(())) => return Ok(target),
                Some(Err(message)) => {
                    warn!("Share via {} failed: {}", target, message);
                    last_error = Some(ShareError::Failed { target, message });
                }
            }
        }

        Err(last_error.unwrap_or(ShareError::NoTargetAvailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sheet(targets: Vec<ShareTarget>, buffer: &SharedBuffer) -> SystemShareSheet {
        SystemShareSheet::new(targets)
            .with_clipboard(None)
            .with_stdout(Box::new(buffer.clone()))
    }

    #[test]
    fn test_falls_back_to_stdout_without_clipboard() {
        let buffer = SharedBuffer::default();
        let sheet = sheet(vec![ShareTarget::Clipboard, ShareTarget::Stdout], &buffer);

        let target = sheet.share(&ShareRequest::new("\"Hi\" - Me")).unwrap();

        assert_eq!(target, ShareTarget::Stdout);
        assert_eq!(buffer.contents(), "\"Hi\" - Me\n");
    }

    #[test]
    fn test_excluded_targets_are_skipped() {
        let buffer = SharedBuffer::default();
        let sheet = sheet(vec![ShareTarget::Stdout], &buffer);
        let request = ShareRequest::new("t").with_excluded(vec![ShareTarget::Stdout]);

        assert_eq!(sheet.share(&request), Err(ShareError::NoTargetAvailable));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_unservable_targets_are_skipped() {
        let buffer = SharedBuffer::default();
        let sheet = sheet(
            vec![ShareTarget::MarkupAsPdf, ShareTarget::Stdout],
            &buffer,
        );
        let request = ShareRequest::new("t").with_excluded(Vec::new());

        assert_eq!(sheet.share(&request), Ok(ShareTarget::Stdout));
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_failure_falls_through() {
        let buffer = SharedBuffer::default();
        let sheet = SystemShareSheet::new(vec![ShareTarget::Clipboard, ShareTarget::Stdout])
            .with_clipboard(Some(ClipboardCommand::new(
                "sh",
                vec!["-c".to_string(), "exit 1".to_string()],
            )))
            .with_stdout(Box::new(buffer.clone()));

        assert_eq!(sheet.share(&ShareRequest::new("t")), Ok(ShareTarget::Stdout));
    }

    #[cfg(unix)]
    #[test]
    fn test_only_failing_target_reports_failure() {
        let sheet = SystemShareSheet::new(vec![ShareTarget::Clipboard]).with_clipboard(Some(
            ClipboardCommand::new("sh", vec!["-c".to_string(), "exit 1".to_string()]),
        ));

        assert!(matches!(
            sheet.share(&ShareRequest::new("t")),
            Err(ShareError::Failed {
                target: ShareTarget::Clipboard,
                ..
            })
        ));
    }
}
