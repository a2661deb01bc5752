//! Hacker News daily digest. The feed has one item per day whose
//! description is an HTML list of that day's stories, so every item becomes
//! a section and its stories the articles.

use crate::models::{Entry, make_article, make_section};
use crate::source::{Adapter, Context};
use crate::strategies::feed::{self, FeedItem, FeedSchema};
use crate::strategies::{Scrape, Strategy, element_text, section_failed, selector};
use async_trait::async_trait;
use scraper::Html;
use tracing::{info, instrument};

const ID: &str = "hackernews";
const FEED_URL: &str = "http://www.daemonology.net/hn-daily/index.rss";
const DEFAULT_TITLE: &str = "Daily Hacker News";

pub fn adapter() -> Adapter {
    Adapter::new(ID, "Hacker News", Strategy::custom(HackerNews))
}

pub struct HackerNews;

#[async_trait]
impl Scrape for HackerNews {
    #[instrument(level = "info", skip_all)]
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry> {
        match feed::fetch_items(ctx, FEED_URL, FeedSchema::Rss).await {
            Ok(items) => {
                info!(days = items.len(), "Parsed digest feed");
                items.iter().flat_map(day_entries).collect()
            }
            Err(e) => {
                section_failed(ID, DEFAULT_TITLE, &e);
                Vec::new()
            }
        }
    }
}

/// Heading for the day followed by its stories.
pub fn day_entries(item: &FeedItem) -> Vec<Entry> {
    let title = item
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    let mut out = vec![make_section(title)];
    if let Some(description) = &item.description {
        out.extend(stories(description));
    }
    out
}

fn stories(description: &str) -> Vec<Entry> {
    let Ok(links) = selector("ul > li > span.storylink > a") else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(description);
    fragment
        .select(&links)
        .filter_map(|a| make_article(&element_text(&a), a.value().attr("href")?, None))
        .collect()
}
