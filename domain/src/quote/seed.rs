//! Built-in catalog entries

use super::category::CreatorCategory;
use super::entities::Quote;

/// The five quotes every session starts with, in display order
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The greatest glory in living lies not in never falling, but in rising every time we fall.",
            CreatorCategory::Poet,
            "Nelson Mandela",
        ),
        Quote::new(
            "The way to get started is to quit talking and begin doing.",
            CreatorCategory::Engineer,
            "Walt Disney",
        ),
        Quote::new(
            "Your time is limited, don't waste it living someone else's life.",
            CreatorCategory::Engineer,
            "Steve Jobs",
        ),
        Quote::new(
            "If life were predictable it would cease to be life, and be without flavor.",
            CreatorCategory::Artist,
            "Eleanor Roosevelt",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            CreatorCategory::Artist,
            "John Lennon",
        ),
    ]
}
