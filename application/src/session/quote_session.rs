//! Local quote session
//!
//! Holds everything the home screen shows: the catalog, the three filter
//! predicates, the last generated quote, the error/notice line and the
//! name-query notice. The name notice is recomputed whenever a predicate
//! or the catalog changes, so it is always in step with [`QuoteSession::filtered`].

use crate::config::SessionConfig;
use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::share_target::ShareError;
use quotegen_domain::{
    CreatorCategory, DomainError, FilterOutcome, LengthFilter, Notice, Quote, QuoteFilter,
    QuoteStore, ShareRequest, select,
};
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// State of the local quote screen
pub struct QuoteSession {
    store: QuoteStore,
    filter: QuoteFilter,
    current: Option<Quote>,
    /// Last message for the user (error or informational)
    message: Option<String>,
    name_notice: Option<Notice>,
    config: SessionConfig,
    logger: Arc<dyn ActivityLogger>,
}

impl QuoteSession {
    pub fn new(store: QuoteStore) -> Self {
        let mut session = Self {
            store,
            filter: QuoteFilter::default(),
            current: None,
            message: None,
            name_notice: None,
            config: SessionConfig::default(),
            logger: Arc::new(NoActivityLogger),
        };
        session.refresh();
        session
    }

    /// Session over the built-in seed catalog
    pub fn seeded() -> Self {
        Self::new(QuoteStore::seeded())
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== Accessors ====================

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn filter(&self) -> &QuoteFilter {
        &self.filter
    }

    /// The last generated quote, if any
    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    /// The message line under the quote
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// "No quotes found for the entered creator name." while it applies
    pub fn name_notice(&self) -> Option<Notice> {
        self.name_notice
    }

    // ==================== Filter changes ====================

    pub fn set_length_filter(&mut self, length: LengthFilter) {
        self.filter.length = length;
        self.refresh();
    }

    pub fn set_creator_filter(&mut self, creator: CreatorCategory) {
        self.filter.creator = creator;
        self.refresh();
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filter.name_query = query.into();
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: QuoteFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Current filter applied to the catalog
    pub fn filtered(&self) -> FilterOutcome<'_> {
        self.filter.apply(self.store.list())
    }

    // ==================== Intents ====================

    /// Append a quote to the catalog
    pub fn add_quote(
        &mut self,
        text: impl Into<String>,
        category: CreatorCategory,
        creator_name: impl Into<String>,
    ) -> &Quote {
        let quote = Quote::new(text, category, creator_name);
        self.logger.log(ActivityEvent::new(
            "quote_added",
            serde_json::json!({
                "text": quote.text(),
                "category": quote.category().as_str(),
                "creator": quote.creator_name(),
            }),
        ));
        self.store.push(quote);
        self.refresh();
        &self.store.list()[self.store.len() - 1]
    }

    /// Pick a random quote from the filtered subset.
    ///
    /// On success the quote becomes current and the message line shows the
    /// selection notice (or clears). On failure the current quote is left
    /// alone and the message line shows the error.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Quote, DomainError> {
        let picked = {
            let outcome = self.filter.apply(self.store.list());
            select(&outcome.quotes, rng).map(|s| ((*s.item).clone(), s.notice))
        };

        match picked {
            Ok((quote, notice)) => {
                debug!("Generated quote by {}", quote.creator_name());
                self.logger.log(ActivityEvent::new(
                    "quote_generated",
                    serde_json::json!({
                        "text": quote.text(),
                        "creator": quote.creator_name(),
                        "filter": self.filter.to_string(),
                    }),
                ));
                self.message = notice.map(|n| n.message().to_string());
                Ok(self.current.insert(quote))
            }
            Err(e) => {
                debug!("Generate failed with filter {}: {}", self.filter, e);
                self.message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Build a share request for the current quote.
    ///
    /// Fails with [`ShareError::NothingToShare`] (and sets the message line)
    /// when nothing has been generated yet.
    pub fn share_request(&mut self) -> Result<ShareRequest, ShareError> {
        match &self.current {
            Some(quote) => Ok(ShareRequest::new(quote.share_text())
                .with_excluded(self.config.excluded_share_targets.clone())),
            None => {
                let err = ShareError::NothingToShare;
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn refresh(&mut self) {
        self.name_notice = self.filter.apply(self.store.list()).notice;
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotegen_domain::ShareTarget;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ActivityLogger for RecordingLogger {
        fn log(&self, event: ActivityEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[test]
    fn test_short_filter_yields_no_matches() {
        let mut session = QuoteSession::seeded();
        session.set_length_filter(LengthFilter::Short);

        let err = session.generate(&mut rng()).unwrap_err();

        assert_eq!(err, DomainError::NoMatches);
        assert_eq!(
            session.message(),
            Some("No quotes available for the selected criteria.")
        );
        assert!(session.current().is_none());
    }

    #[test]
    fn test_failed_generate_keeps_previous_quote() {
        let mut session = QuoteSession::seeded();
        let first = session.generate(&mut rng()).unwrap().clone();

        session.set_length_filter(LengthFilter::Short);
        assert!(session.generate(&mut rng()).is_err());

        assert_eq!(session.current(), Some(&first));
    }

    #[test]
    fn test_single_match_sets_only_one_message() {
        let mut session = QuoteSession::seeded();
        session.set_name_query("mandela");

        let quote = session.generate(&mut rng()).unwrap().clone();

        assert_eq!(quote.creator_name(), "Nelson Mandela");
        assert_eq!(
            session.message(),
            Some("There is only one quote. Add more quotes.")
        );
    }

    #[test]
    fn test_successful_generate_clears_message() {
        let mut session = QuoteSession::seeded();
        session.set_length_filter(LengthFilter::Short);
        let _ = session.generate(&mut rng());
        assert!(session.message().is_some());

        session.set_length_filter(LengthFilter::All);
        session.generate(&mut rng()).unwrap();
        assert!(session.message().is_none());
    }

    #[test]
    fn test_name_notice_tracks_query_and_catalog() {
        let mut session = QuoteSession::seeded();
        assert!(session.name_notice().is_none());

        session.set_name_query("Ada");
        assert_eq!(session.name_notice(), Some(Notice::NoNameMatch));

        session.add_quote("Test", CreatorCategory::Engineer, "Ada");
        assert!(session.name_notice().is_none());

        session.set_name_query("");
        assert!(session.name_notice().is_none());
    }

    #[test]
    fn test_added_quote_is_filtered_in_order() {
        let mut session = QuoteSession::seeded();
        session.add_quote("Test", CreatorCategory::Engineer, "Ada");
        session.set_creator_filter(CreatorCategory::Engineer);

        let outcome = session.filtered();
        let texts: Vec<&str> = outcome.quotes.iter().map(|q| q.text()).collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[2], "Test");
    }

    #[test]
    fn test_share_without_quote_fails() {
        let mut session = QuoteSession::seeded();
        assert_eq!(session.share_request(), Err(ShareError::NothingToShare));
        assert_eq!(session.message(), Some("You first need to generate a quote!"));
    }

    #[test]
    fn test_share_request_formats_current_quote() {
        let mut session = QuoteSession::seeded()
            .with_config(SessionConfig::default().with_excluded_share_targets(vec![
                ShareTarget::Stdout,
            ]));
        session.set_name_query("lennon");
        session.generate(&mut rng()).unwrap();

        let request = session.share_request().unwrap();
        assert_eq!(
            request.text,
            "\"Life is what happens when you're busy making other plans.\" - John Lennon"
        );
        assert_eq!(request.excluded, vec![ShareTarget::Stdout]);
    }

    #[test]
    fn test_activity_is_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let mut session = QuoteSession::seeded().with_logger(logger.clone());

        session.add_quote("Test", CreatorCategory::Other, "Ada");
        session.generate(&mut rng()).unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec!["quote_added", "quote_generated"]
        );
    }
}
