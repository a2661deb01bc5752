//! Extraction strategies.
//!
//! Every strategy walks its declared sections in order. For each section it
//! first emits the section heading, then tries to fetch and parse it; a
//! failure is logged and the walk moves on to the next section. Headings are
//! therefore always present, even for sections that produced nothing.
//!
//! | Strategy | Module | Input |
//! |----------|--------|-------|
//! | Feed | [`feed`] | RSS 2.0 / Atom |
//! | StructuredFeed | [`feed`] | RDF (names matched without prefixes) |
//! | Listing | [`listing`] | HTML index pages, optionally paginated |
//! | Edition | [`edition`] | Listing whose URLs embed a daily edition |
//! | Custom | [`Scrape`] implementors | anything else |

pub mod edition;
pub mod feed;
pub mod listing;

use crate::error::ScrapeError;
use crate::models::Entry;
use crate::source::Context;
use async_trait::async_trait;
use scraper::{ElementRef, Selector};
use tracing::warn;

pub use edition::EditionSpec;
pub use listing::{ListingSection, ListingSpec};

pub enum Strategy {
    Feed(Vec<FeedSection>),
    StructuredFeed(Vec<FeedSection>),
    Listing(ListingSpec),
    Edition(EditionSpec, ListingSpec),
    Custom(Box<dyn Scrape>),
}

impl Strategy {
    /// Feed strategy from `(title, url)` pairs.
    pub fn feeds(sections: &[(&str, &str)]) -> Self {
        Strategy::Feed(FeedSection::from_pairs(sections))
    }

    /// RDF strategy from `(title, url)` pairs.
    pub fn rdf(sections: &[(&str, &str)]) -> Self {
        Strategy::StructuredFeed(FeedSection::from_pairs(sections))
    }

    pub fn custom(scraper: impl Scrape + 'static) -> Self {
        Strategy::Custom(Box::new(scraper))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSection {
    pub title: String,
    pub url: String,
}

impl FeedSection {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<Self> {
        pairs
            .iter()
            .map(|(title, url)| FeedSection {
                title: title.to_string(),
                url: url.to_string(),
            })
            .collect()
    }
}

/// Fully custom extraction for publishers no declarative strategy fits.
///
/// Implementors must apply the same per-section isolation as the built-in
/// strategies: [`section_failed`] is there to log a dropped section.
#[async_trait]
pub trait Scrape: Send + Sync {
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry>;
}

pub fn section_failed(source: &str, section: &str, error: &ScrapeError) {
    warn!(%source, %section, %error, "Problem processing section; skipping");
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

/// All text below `element`, whitespace collapsed.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    clean(&element.text().collect::<String>())
}

pub(crate) fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selector_error() {
        assert!(matches!(selector("div[["), Err(ScrapeError::Selector(_))));
        assert!(selector("div.list > a").is_ok());
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<a>  Big\n   <b>news</b>  today </a>");
        let sel = selector("a").unwrap();
        let a = doc.select(&sel).next().unwrap();
        assert_eq!(element_text(&a), "Big news today");
    }

    #[test]
    fn test_feed_pairs() {
        match Strategy::feeds(&[("World", "http://a/world.xml")]) {
            Strategy::Feed(sections) => {
                assert_eq!(sections[0].title, "World");
                assert_eq!(sections[0].url, "http://a/world.xml");
            }
            _ => panic!("expected feed strategy"),
        }
    }
}
