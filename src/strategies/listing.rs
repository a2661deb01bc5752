//! HTML index pages, optionally paginated.
//!
//! A [`ListingSpec`] names where the items are (CSS selectors) and how pages
//! are addressed. For each section the strategy fetches page 1, reads any
//! numeric "last page" markers, and keeps going until it reaches the larger
//! of that marker and the section's declared page count, never beyond the
//! per-section cap from the request [`Context`]. URLs already emitted by an
//! earlier page or section of the same run are skipped.

use super::{clean, element_text, section_failed, selector};
use crate::error::ScrapeError;
use crate::fetcher::FetchRequest;
use crate::models::{Entry, make_article, make_section};
use crate::source::Context;
use crate::utils::{decode_text, paged_url, resolve_url};
use encoding_rs::Encoding;
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, info, instrument};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSection {
    pub title: String,
    pub url: String,
    /// Pages to fetch even without a last-page marker (at least 1).
    pub pages: u32,
}

#[derive(Debug, Clone)]
pub struct ListingSpec {
    pub sections: Vec<ListingSection>,
    /// Selector for one item node per article.
    pub items: &'static str,
    /// Selector, inside the item, for the element carrying the href.
    /// `None` means the item itself.
    pub link: Option<&'static str>,
    pub href_attr: &'static str,
    /// Selector, inside the item, for the title text. `None` uses the link text.
    pub text: Option<&'static str>,
    pub summary: Option<&'static str>,
    /// Query parameter carrying the page number; `None` disables paging.
    pub page_param: Option<&'static str>,
    /// Elements whose numeric text reports the last page.
    pub last_page: Option<&'static str>,
    pub cookies: Vec<(String, String)>,
    pub encoding: Option<&'static Encoding>,
}

impl ListingSpec {
    pub fn new(items: &'static str) -> Self {
        Self {
            sections: Vec::new(),
            items,
            link: None,
            href_attr: "href",
            text: None,
            summary: None,
            page_param: None,
            last_page: None,
            cookies: Vec::new(),
            encoding: None,
        }
    }

    pub fn section(self, title: &str, url: &str) -> Self {
        self.section_pages(title, url, 1)
    }

    pub fn section_pages(mut self, title: &str, url: &str, pages: u32) -> Self {
        self.sections.push(ListingSection {
            title: title.to_string(),
            url: url.to_string(),
            pages: pages.max(1),
        });
        self
    }

    pub fn sections(self, pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(self, |spec, (title, url)| spec.section(title, url))
    }

    pub fn link(mut self, css: &'static str) -> Self {
        self.link = Some(css);
        self
    }

    pub fn href_attr(mut self, attr: &'static str) -> Self {
        self.href_attr = attr;
        self
    }

    pub fn text(mut self, css: &'static str) -> Self {
        self.text = Some(css);
        self
    }

    pub fn summary(mut self, css: &'static str) -> Self {
        self.summary = Some(css);
        self
    }

    pub fn paged(mut self, param: &'static str) -> Self {
        self.page_param = Some(param);
        self
    }

    pub fn last_page(mut self, css: &'static str) -> Self {
        self.last_page = Some(css);
        self
    }

    pub fn cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    fn request(&self, url: &Url) -> FetchRequest {
        let mut request = FetchRequest::get(url.as_str());
        request.cookies = self.cookies.clone();
        request
    }
}

/// What one listing page yielded.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub articles: Vec<Entry>,
    pub last_page: Option<u32>,
}

#[instrument(level = "info", skip_all, fields(%source))]
pub async fn run(ctx: &Context<'_>, source: &str, spec: &ListingSpec) -> Vec<Entry> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for section in &spec.sections {
        out.push(make_section(&section.title));
        let before = out.len();
        if let Err(e) = run_section(ctx, spec, section, &mut seen, &mut out).await {
            section_failed(source, &section.title, &e);
        }
        info!(section = %section.title, count = out.len() - before, "Parsed listing section");
    }
    out
}

async fn run_section(
    ctx: &Context<'_>,
    spec: &ListingSpec,
    section: &ListingSection,
    seen: &mut HashSet<String>,
    out: &mut Vec<Entry>,
) -> Result<(), ScrapeError> {
    let base = Url::parse(&section.url).map_err(|source| ScrapeError::Url {
        url: section.url.clone(),
        source,
    })?;
    let cap = ctx.max_pages.max(1);
    let mut last = section.pages;
    let mut page = 1;

    while page <= last.min(cap) {
        let page_url = match spec.page_param {
            Some(param) => paged_url(&base, param, page),
            None => base.clone(),
        };
        let bytes = ctx
            .fetcher
            .fetch(spec.request(&page_url))
            .await
            .ok_or_else(|| ScrapeError::NoData(page_url.to_string()))?;
        let html = decode_text(&bytes, spec.encoding);
        let parsed = parse_page(&html, &page_url, spec)?;

        for entry in parsed.articles {
            if let Some(url) = entry.url() {
                if seen.insert(url.to_string()) {
                    out.push(entry);
                }
            }
        }

        if spec.page_param.is_none() {
            break;
        }
        if let Some(reported) = parsed.last_page {
            if reported > cap {
                debug!(reported, cap, "Last page marker above cap; clamping");
            }
            last = last.max(reported);
        }
        page += 1;
    }
    Ok(())
}

/// Extract articles and the last-page marker from one listing page.
pub fn parse_page(
    html: &str,
    page_url: &Url,
    spec: &ListingSpec,
) -> Result<ListingPage, ScrapeError> {
    let document = Html::parse_document(html);
    let items = selector(spec.items)?;
    let link = spec.link.map(selector).transpose()?;
    let text = spec.text.map(selector).transpose()?;
    let summary = spec.summary.map(selector).transpose()?;

    let mut articles = Vec::new();
    for item in document.select(&items) {
        let anchor = match &link {
            Some(sel) => item.select(sel).next(),
            None => Some(item),
        };
        let Some(anchor) = anchor else { continue };
        let Some(href) = anchor.value().attr(spec.href_attr) else {
            continue;
        };
        let Some(url) = resolve_url(page_url, href) else {
            continue;
        };
        let title = match &text {
            Some(sel) => item.select(sel).next().map(|el| element_text(&el)),
            None => Some(element_text(&anchor)),
        };
        let Some(title) = title else { continue };
        let abstract_text = summary
            .as_ref()
            .and_then(|sel| item.select(sel).next())
            .map(|el| element_text(&el));

        if let Some(entry) = make_article(&title, &url, abstract_text.as_deref()) {
            articles.push(entry);
        }
    }

    let last_page = match spec.last_page {
        Some(css) => {
            let marker = selector(css)?;
            document
                .select(&marker)
                .filter_map(|el| clean(&el.text().collect::<String>()).parse::<u32>().ok())
                .max()
        }
        None => None,
    };

    debug!(url = %page_url, count = articles.len(), ?last_page, "Parsed listing page");
    Ok(ListingPage {
        articles,
        last_page,
    })
}
