//! AM730 serves its section listings as JSON to a form-encoded POST.

use crate::error::ScrapeError;
use crate::fetcher::FetchRequest;
use crate::models::{Entry, make_article, make_section};
use crate::source::{Adapter, Context};
use crate::strategies::{Scrape, Strategy, section_failed};
use crate::utils::resolve_url;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

const ID: &str = "am730";
const ROOT: &str = "https://www.am730.com.hk";

/// `(title, path, pages)`
const SECTIONS: [(&str, &str, u32); 8] = [
    ("本地", "/本地", 5),
    ("國際", "/國際", 3),
    ("娛樂", "/娛樂", 3),
    ("中國", "/中國", 2),
    ("財經", "/財經", 2),
    ("地產", "/地產", 2),
    ("體育", "/體育", 2),
    ("專欄", "/column", 5),
];

const HEADERS: [(&str, &str); 3] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8"),
    ("X-Requested-With", "XMLHttpRequest"),
];

pub fn adapter() -> Adapter {
    Adapter::new(ID, "AM730", Strategy::custom(Am730)).icon("https://www.am730.com.hk/favicon.ico")
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    data: Vec<ListingItem>,
}

#[derive(Debug, Deserialize)]
struct ListingItem {
    title: Option<String>,
    url: Option<String>,
}

pub struct Am730;

#[async_trait]
impl Scrape for Am730 {
    #[instrument(level = "info", skip_all)]
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry> {
        let mut out = Vec::new();
        for (title, path, pages) in SECTIONS {
            out.push(make_section(title));
            let pages = pages.min(ctx.max_pages.max(1));
            if let Err(e) = section(ctx, path, pages, &mut out).await {
                section_failed(ID, title, &e);
            }
        }
        out
    }
}

async fn section(
    ctx: &Context<'_>,
    path: &str,
    pages: u32,
    out: &mut Vec<Entry>,
) -> Result<(), ScrapeError> {
    let url = format!("{ROOT}{path}");
    for page in 1..=pages {
        let request = FetchRequest::post(url.as_str(), format!("page={page}")).headers(&HEADERS);
        let bytes = ctx
            .fetcher
            .fetch(request)
            .await
            .ok_or_else(|| ScrapeError::NoData(format!("{url} page {page}")))?;
        let articles = parse_listing(&bytes)?;
        debug!(%url, page, count = articles.len(), "Parsed page");
        out.extend(articles);
    }
    Ok(())
}

pub fn parse_listing(bytes: &[u8]) -> Result<Vec<Entry>, ScrapeError> {
    let root = Url::parse(ROOT).map_err(|source| ScrapeError::Url {
        url: ROOT.to_string(),
        source,
    })?;
    let listing: Listing = serde_json::from_slice(bytes)?;

    Ok(listing
        .data
        .data
        .into_iter()
        .filter_map(|item| {
            let url = resolve_url(&root, item.url.as_deref()?)?;
            make_article(item.title.as_deref()?, &url, None)
        })
        .collect())
}
