//! Oriental Daily: section URLs are discovered from the site menu.

use crate::error::ScrapeError;
use crate::models::{Entry, make_article, make_section};
use crate::source::{Adapter, Context};
use crate::strategies::{Scrape, Strategy, element_text, section_failed, selector};
use crate::utils::{decode_text, resolve_url};
use async_trait::async_trait;
use scraper::Html;
use tracing::{info, instrument};
use url::Url;

const ID: &str = "orientaldaily";
const TOP_URL: &str = "http://orientaldaily.on.cc";

/// Menu link class → section title, in output order.
const SECTIONS: [(&str, &str); 6] = [
    ("news", "要聞港聞"),
    ("china_world", "兩岸國際"),
    ("finance", "產經"),
    ("entertainment", "娛樂"),
    ("lifestyle", "副刊"),
    ("sport", "體育"),
];

pub fn adapter() -> Adapter {
    Adapter::new(ID, "東方日報(香港)", Strategy::custom(OrientalDaily))
        .icon("http://orientaldaily.on.cc/favicon.ico")
}

pub struct OrientalDaily;

#[async_trait]
impl Scrape for OrientalDaily {
    #[instrument(level = "info", skip_all)]
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry> {
        let sections = match discover(ctx).await {
            Ok(sections) => sections,
            Err(e) => {
                section_failed(ID, "menu", &e);
                return Vec::new();
            }
        };
        info!(count = sections.len(), "Discovered sections");

        let mut out = Vec::new();
        for (title, url) in sections {
            out.push(make_section(title));
            match fetch_section(ctx, &url).await {
                Ok(articles) => out.extend(articles),
                Err(e) => section_failed(ID, title, &e),
            }
        }
        out
    }
}

async fn discover(ctx: &Context<'_>) -> Result<Vec<(&'static str, String)>, ScrapeError> {
    let bytes = ctx
        .fetcher
        .get(TOP_URL)
        .await
        .ok_or_else(|| ScrapeError::NoData(TOP_URL.to_string()))?;
    parse_menu(&decode_text(&bytes, None))
}

async fn fetch_section(ctx: &Context<'_>, url: &str) -> Result<Vec<Entry>, ScrapeError> {
    let bytes = ctx
        .fetcher
        .get(url)
        .await
        .ok_or_else(|| ScrapeError::NoData(url.to_string()))?;
    parse_section(&decode_text(&bytes, None))
}

/// Sections present in the menu, ordered as in [`SECTIONS`]. Menu entries
/// without a known class are ignored.
pub fn parse_menu(html: &str) -> Result<Vec<(&'static str, String)>, ScrapeError> {
    let base = top_url()?;
    let links = selector("#pageCTN > header > div.middle > ul.menuList > li > a")?;
    let document = Html::parse_document(html);

    let found: Vec<(&str, String)> = document
        .select(&links)
        .filter_map(|a| {
            let class = SECTIONS
                .iter()
                .map(|(class, _)| *class)
                .find(|class| a.value().classes().any(|c| c == *class))?;
            let url = resolve_url(&base, a.value().attr("href")?)?;
            Some((class, url))
        })
        .collect();

    Ok(SECTIONS
        .iter()
        .filter_map(|(class, title)| {
            found
                .iter()
                .find(|(c, _)| c == class)
                .map(|(_, url)| (*title, url.clone()))
        })
        .collect())
}

pub fn parse_section(html: &str) -> Result<Vec<Entry>, ScrapeError> {
    let base = top_url()?;
    let items = selector("div.sectionList > div.subsection > ul.items > li[articleid]")?;
    let link = selector("a")?;
    let text = selector("a > div.text")?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&items)
        .filter_map(|li| {
            let href = li.select(&link).next()?.value().attr("href")?;
            let title = element_text(&li.select(&text).next()?);
            make_article(&title, &resolve_url(&base, href)?, None)
        })
        .collect())
}

fn top_url() -> Result<Url, ScrapeError> {
    Url::parse(TOP_URL).map_err(|source| ScrapeError::Url {
        url: TOP_URL.to_string(),
        source,
    })
}
