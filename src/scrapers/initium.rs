//! Initium Media channel digests from the public JSON API.

use crate::error::ScrapeError;
use crate::fetcher::FetchRequest;
use crate::models::{Entry, make_article, make_section};
use crate::source::{Adapter, Context};
use crate::strategies::{Scrape, Strategy, section_failed};
use crate::utils::resolve_url;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

const ID: &str = "the_initium";
const BASE: &str = "https://api.theinitium.com";
const API: &str = "https://api.theinitium.com/api/v2/channel/articles/";
const CREDENTIALS: &str = "anonymous:GiCeLEjxnqBcVpnp6cLsUvJievvRQcAXLv";

const CHANNELS: [(&str, &str); 9] = [
    ("最新", "latest"),
    ("香港", "hongkong"),
    ("國際", "international"),
    ("大陸", "mainland"),
    ("台灣", "taiwan"),
    ("評論", "opinion"),
    ("科技", "technology"),
    ("風物", "culture"),
    ("廣場", "notes-and-letters"),
];

pub fn adapter() -> Adapter {
    Adapter::new(ID, "端傳媒", Strategy::custom(Initium))
}

#[derive(Debug, Deserialize)]
struct Channel {
    digests: Vec<Digest>,
}

#[derive(Debug, Deserialize)]
struct Digest {
    article: Option<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    headline: Option<String>,
    url: Option<String>,
    lead: Option<String>,
}

pub struct Initium;

#[async_trait]
impl Scrape for Initium {
    #[instrument(level = "info", skip_all)]
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry> {
        let mut out = Vec::new();
        for (title, slug) in CHANNELS {
            out.push(make_section(title));
            match channel(ctx, slug).await {
                Ok(articles) => {
                    debug!(%slug, count = articles.len(), "Parsed channel");
                    out.extend(articles);
                }
                Err(e) => section_failed(ID, title, &e),
            }
        }
        out
    }
}

pub fn channel_url(slug: &str) -> String {
    format!("{API}?language=zh-hant&slug={}", urlencoding::encode(slug))
}

fn authorization() -> String {
    format!("Basic {}", STANDARD.encode(CREDENTIALS))
}

async fn channel(ctx: &Context<'_>, slug: &str) -> Result<Vec<Entry>, ScrapeError> {
    let url = channel_url(slug);
    let request = FetchRequest::get(url.as_str())
        .header("Authorization", authorization())
        .header("Accept", "application/json");
    let bytes = ctx
        .fetcher
        .fetch(request)
        .await
        .ok_or_else(|| ScrapeError::NoData(url.clone()))?;
    parse_channel(&bytes)
}

pub fn parse_channel(bytes: &[u8]) -> Result<Vec<Entry>, ScrapeError> {
    let base = Url::parse(BASE).map_err(|source| ScrapeError::Url {
        url: BASE.to_string(),
        source,
    })?;
    let channel: Channel = serde_json::from_slice(bytes)?;

    Ok(channel
        .digests
        .into_iter()
        .filter_map(|digest| {
            let article = digest.article?;
            let url = resolve_url(&base, article.url.as_deref()?)?;
            make_article(article.headline.as_deref()?, &url, article.lead.as_deref())
        })
        .collect())
}
