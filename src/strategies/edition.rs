//! Listings whose section URLs embed a daily edition such as `20240102`.
//!
//! The current edition is read from the publisher's front door. When that
//! fails for any reason the edition falls back to the local date, shifted
//! back by the reporting cutoff so that the small hours still belong to the
//! previous day's paper.

use super::{ListingSpec, listing, selector};
use crate::error::ScrapeError;
use crate::models::Entry;
use crate::source::Context;
use crate::utils::decode_text;
use chrono::{Duration, NaiveDateTime};
use regex::Regex;
use scraper::Html;
use tracing::{info, instrument, warn};

/// Placeholder replaced by the resolved edition in listing section URLs.
pub const EDITION_PLACEHOLDER: &str = "{edition}";

const DEFAULT_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone)]
pub struct EditionSpec {
    pub front_door: &'static str,
    /// Elements in the front door's navigation that may carry the edition.
    pub selector: &'static str,
    /// Attribute whose value is matched against `pattern`.
    pub attribute: &'static str,
    /// The first capture group is the edition.
    pub pattern: &'static str,
    /// Overrides the configured cutoff hour for this publisher.
    pub cutoff_hour: Option<u32>,
    /// `strftime` layout of the fallback edition.
    pub format: &'static str,
}

impl EditionSpec {
    pub fn new(front_door: &'static str, selector: &'static str, pattern: &'static str) -> Self {
        Self {
            front_door,
            selector,
            attribute: "href",
            pattern,
            cutoff_hour: None,
            format: DEFAULT_FORMAT,
        }
    }

    pub fn attribute(mut self, attribute: &'static str) -> Self {
        self.attribute = attribute;
        self
    }

    pub fn cutoff_hour(mut self, hour: u32) -> Self {
        self.cutoff_hour = Some(hour);
        self
    }
}

/// Local date minus `cutoff_hour` hours, laid out with `format`.
pub fn fallback_edition(now: NaiveDateTime, cutoff_hour: u32, format: &str) -> String {
    (now - Duration::hours(i64::from(cutoff_hour)))
        .format(format)
        .to_string()
}

/// Search the front door markup for the edition.
pub fn find_edition(html: &str, spec: &EditionSpec) -> Result<String, ScrapeError> {
    let pattern = Regex::new(spec.pattern)?;
    let candidates = selector(spec.selector)?;
    let document = Html::parse_document(html);

    document
        .select(&candidates)
        .filter_map(|el| el.value().attr(spec.attribute))
        .find_map(|value| {
            pattern
                .captures(value)
                .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
                .map(|m| m.as_str().to_string())
        })
        .ok_or(ScrapeError::MissingField("edition"))
}

/// Resolve today's edition. Never fails.
pub async fn resolve_edition(ctx: &Context<'_>, source: &str, spec: &EditionSpec) -> String {
    let cutoff = spec.cutoff_hour.unwrap_or(ctx.cutoff_hour);
    let discovered = match ctx.fetcher.get(spec.front_door).await {
        Some(bytes) => find_edition(&decode_text(&bytes, None), spec),
        None => Err(ScrapeError::NoData(spec.front_door.to_string())),
    };

    match discovered {
        Ok(edition) => {
            info!(%source, %edition, "Discovered edition");
            edition
        }
        Err(error) => {
            let edition = fallback_edition(ctx.now, cutoff, spec.format);
            warn!(%source, %error, %edition, "Edition discovery failed; using local date");
            edition
        }
    }
}

#[instrument(level = "info", skip_all, fields(%source))]
pub async fn run(
    ctx: &Context<'_>,
    source: &str,
    edition: &EditionSpec,
    spec: &ListingSpec,
) -> Vec<Entry> {
    let resolved = resolve_edition(ctx, source, edition).await;
    let spec = with_edition(spec, &resolved);
    listing::run(ctx, source, &spec).await
}

/// Copy of `spec` with the edition substituted into every section URL.
pub fn with_edition(spec: &ListingSpec, edition: &str) -> ListingSpec {
    let mut spec = spec.clone();
    for section in &mut spec.sections {
        section.url = section.url.replace(EDITION_PLACEHOLDER, edition);
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::CannedFetcher;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn ctx(fetcher: &CannedFetcher, now: NaiveDateTime) -> Context<'_> {
        Context {
            fetcher,
            max_pages: 10,
            cutoff_hour: 4,
            now,
        }
    }

    fn mingpao() -> EditionSpec {
        EditionSpec::new(
            "http://paper.example/Van/",
            "#mp-menu a",
            r"htm/News/([0-9]{8})/main_r\.htm",
        )
    }

    fn listing() -> ListingSpec {
        ListingSpec::new("h4.listing-link > a")
            .section("A1", "http://paper.example/Van/htm/News/{edition}/VAindex_r.htm")
    }

    #[test]
    fn test_fallback_before_cutoff_is_previous_day() {
        assert_eq!(fallback_edition(at(3), 4, "%Y%m%d"), "20240229");
        assert_eq!(fallback_edition(at(5), 4, "%Y%m%d"), "20240301");
        assert_eq!(fallback_edition(at(3), 0, "%Y%m%d"), "20240301");
        assert_eq!(fallback_edition(at(3), 4, "%Y-%m-%d"), "2024-02-29");
    }

    #[test]
    fn test_find_edition_in_links() {
        let html = r#"<div id="mp-menu"><a href="/Van/index.htm">Home</a>
<a href="htm/News/20240301/main_r.htm">Today</a></div>"#;
        assert_eq!(find_edition(html, &mingpao()).unwrap(), "20240301");
    }

    #[test]
    fn test_find_edition_in_title_attribute() {
        let spec =
            EditionSpec::new("https://x.example/", "#box300B", r"^(\d{8})$").attribute("title");
        let html = r#"<div id="box300B" title="20240229"></div>"#;
        assert_eq!(find_edition(html, &spec).unwrap(), "20240229");
    }

    #[test]
    fn test_find_edition_missing_markup() {
        assert!(matches!(
            find_edition("<html><body></body></html>", &mingpao()),
            Err(ScrapeError::MissingField("edition"))
        ));
    }

    #[test]
    fn test_with_edition_substitutes() {
        let spec = with_edition(&listing(), "20240301");
        assert_eq!(
            spec.sections[0].url,
            "http://paper.example/Van/htm/News/20240301/VAindex_r.htm"
        );
    }

    #[tokio::test]
    async fn test_run_uses_discovered_edition() {
        let fetcher = CannedFetcher::new()
            .with(
                "http://paper.example/Van/",
                r##"<nav id="mp-menu"><a href="htm/News/20240228/main_r.htm">x</a></nav>"##,
            )
            .with(
                "http://paper.example/Van/htm/News/20240228/VAindex_r.htm",
                r#"<h4 class="listing-link"><a href="VAa1_r.htm">頭條</a></h4>"#,
            );
        let entries = run(&ctx(&fetcher, at(12)), "mingpaovancouver", &mingpao(), &listing()).await;

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].url(),
            Some("http://paper.example/Van/htm/News/20240228/VAa1_r.htm")
        );
    }

    #[tokio::test]
    async fn test_run_falls_back_without_front_door() {
        let fetcher = CannedFetcher::new();
        let entries = run(&ctx(&fetcher, at(2)), "mingpaovancouver", &mingpao(), &listing()).await;

        // Heading only; the stale edition yields nothing.
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_section());
        assert_eq!(
            fetcher.urls(),
            vec![
                "http://paper.example/Van/".to_string(),
                "http://paper.example/Van/htm/News/20240229/VAindex_r.htm".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_per_source_cutoff_overrides_context() {
        let fetcher = CannedFetcher::new();
        let spec = mingpao().cutoff_hour(0);
        assert_eq!(
            resolve_edition(&ctx(&fetcher, at(2)), "x", &spec).await,
            "20240301"
        );
    }
}
