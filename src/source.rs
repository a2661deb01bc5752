//! The capability surface every publisher exposes, and the declarative
//! [`Adapter`] that implements it by delegating to a [`Strategy`].

use crate::fetcher::Fetch;
use crate::models::Entry;
use crate::strategies::{self, Strategy};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{info, instrument};

/// Per-request inputs shared by all strategies.
pub struct Context<'a> {
    pub fetcher: &'a dyn Fetch,
    /// Upper bound on pages fetched for any one listing section.
    pub max_pages: u32,
    /// Default reporting cutoff (hours) for edition fallback.
    pub cutoff_hour: u32,
    /// Local wall-clock time of the request.
    pub now: NaiveDateTime,
}

/// A news publisher that can be listed and asked for its current articles.
///
/// `articles` never fails: anything that goes wrong inside a section is
/// logged and the section simply contributes fewer entries.
#[async_trait]
pub trait Source: Send + Sync {
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    fn icon(&self) -> Option<&str> {
        None
    }

    async fn articles(&self, ctx: &Context<'_>) -> Vec<Entry>;
}

/// A publisher described as data: identity plus an extraction strategy.
pub struct Adapter {
    id: &'static str,
    description: &'static str,
    icon: Option<&'static str>,
    strategy: Strategy,
}

impl Adapter {
    pub fn new(id: &'static str, description: &'static str, strategy: Strategy) -> Self {
        Self {
            id,
            description,
            icon: None,
            strategy,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

#[async_trait]
impl Source for Adapter {
    fn id(&self) -> &str {
        self.id
    }

    fn description(&self) -> &str {
        self.description
    }

    fn icon(&self) -> Option<&str> {
        self.icon
    }

    #[instrument(level = "info", skip_all, fields(source = self.id))]
    async fn articles(&self, ctx: &Context<'_>) -> Vec<Entry> {
        let entries = match &self.strategy {
            Strategy::Feed(sections) => {
                strategies::feed::run(ctx, self.id, sections, strategies::feed::FeedSchema::Rss)
                    .await
            }
            Strategy::StructuredFeed(sections) => {
                strategies::feed::run(ctx, self.id, sections, strategies::feed::FeedSchema::Rdf)
                    .await
            }
            Strategy::Listing(spec) => strategies::listing::run(ctx, self.id, spec).await,
            Strategy::Edition(edition, listing) => {
                strategies::edition::run(ctx, self.id, edition, listing).await
            }
            Strategy::Custom(scraper) => scraper.scrape(ctx).await,
        };

        let sections = entries.iter().filter(|e| e.is_section()).count();
        info!(
            sections,
            articles = entries.len() - sections,
            "Collected entries"
        );
        entries
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use chrono::NaiveDate;

    /// Context at 2024-01-02 12:00 with the default limits.
    pub fn context(fetcher: &dyn Fetch) -> Context<'_> {
        Context {
            fetcher,
            max_pages: 10,
            cutoff_hour: 4,
            now: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }
}
