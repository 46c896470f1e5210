//! Share quote use case

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::share_target::{ShareError, SharePort};
use quotegen_domain::{ShareRequest, ShareTarget};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for handing a formatted quote to the share surface
pub struct ShareQuoteUseCase<P: SharePort + 'static> {
    port: Arc<P>,
    logger: Arc<dyn ActivityLogger>,
}

impl<P: SharePort + 'static> ShareQuoteUseCase<P> {
    pub fn new(port: Arc<P>) -> Self {
        Self {
            port,
            logger: Arc::new(NoActivityLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn execute(&self, request: &ShareRequest) -> Result<ShareTarget, ShareError> {
        match self.port.share(request) {
            Ok(target) => {
                info!("Shared quote via {}", target);
                self.logger.log(ActivityEvent::new(
                    "quote_shared",
                    serde_json::json!({
                        "target": target.as_str(),
                        "text": request.text,
                    }),
                ));
                Ok(target)
            }
            Err(e) => {
                warn!("Share failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockShare {
        shared: Mutex<Vec<String>>,
    }

    impl SharePort for MockShare {
        fn share(&self, request: &ShareRequest) -> Result<ShareTarget, ShareError> {
            if !request.allows(ShareTarget::Clipboard) {
                return Err(ShareError::NoTargetAvailable);
            }
            self.shared.lock().unwrap().push(request.text.clone());
            Ok(ShareTarget::Clipboard)
        }
    }

    #[test]
    fn test_share_passes_text_to_port() {
        let port = Arc::new(MockShare {
            shared: Mutex::new(Vec::new()),
        });
        let use_case = ShareQuoteUseCase::new(port.clone());

        let target = use_case
            .execute(&ShareRequest::new("\"Hi\" - Me"))
            .unwrap();

        assert_eq!(target, ShareTarget::Clipboard);
        assert_eq!(*port.shared.lock().unwrap(), vec!["\"Hi\" - Me".to_string()]);
    }

    #[test]
    fn test_share_error_is_returned() {
        let port = Arc::new(MockShare {
            shared: Mutex::new(Vec::new()),
        });
        let use_case = ShareQuoteUseCase::new(port);
        let request = ShareRequest::new("t").with_excluded(vec![ShareTarget::Clipboard]);

        assert_eq!(
            use_case.execute(&request),
            Err(ShareError::NoTargetAvailable)
        );
    }
}
