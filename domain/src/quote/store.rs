//! Append-only in-memory quote catalog

use super::category::CreatorCategory;
use super::entities::Quote;
use super::seed::seed_quotes;

/// Holds the local quotes for the lifetime of a session.
///
/// Insertion order is preserved and entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in seed quotes
    pub fn seeded() -> Self {
        seed_quotes().into_iter().collect()
    }

    /// Append a quote to the end of the catalog
    pub fn add(
        &mut self,
        text: impl Into<String>,
        category: CreatorCategory,
        creator_name: impl Into<String>,
    ) -> &Quote {
        self.push(Quote::new(text, category, creator_name))
    }

    /// Append an already-built quote
    pub fn push(&mut self, quote: Quote) -> &Quote {
        self.quotes.push(quote);
        &self.quotes[self.quotes.len() - 1]
    }

    /// Read-only view of the catalog, in insertion order
    pub fn list(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl FromIterator<Quote> for QuoteStore {
    fn from_iter<I: IntoIterator<Item = Quote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_five_quotes() {
        let store = QuoteStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].creator_name(), "Nelson Mandela");
        assert_eq!(store.list()[4].creator_name(), "John Lennon");
    }

    #[test]
    fn test_add_appends_without_touching_existing() {
        let mut store = QuoteStore::seeded();
        let before = store.list().to_vec();

        let added = store.add("Test", CreatorCategory::Engineer, "Ada").clone();

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(&store.list()[..before.len()], before.as_slice());
        assert_eq!(store.list().last(), Some(&added));
        assert_eq!(added.text(), "Test");
    }

    #[test]
    fn test_add_accepts_empty_strings() {
        let mut store = QuoteStore::new();
        assert!(store.is_empty());
        store.add("", CreatorCategory::All, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let store: QuoteStore = vec![
            Quote::new("a", CreatorCategory::Poet, "A"),
            Quote::new("b", CreatorCategory::Poet, "B"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.list()[1].text(), "b");
    }
}
