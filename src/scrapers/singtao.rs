//! Sing Tao Canada. One site serves three regional editions, chosen by the
//! `edition` cookie; category slugs carry the city name.

use crate::error::ScrapeError;
use crate::fetcher::FetchRequest;
use crate::models::{Entry, make_article, make_section};
use crate::source::{Adapter, Context};
use crate::strategies::{Scrape, Strategy, element_text, section_failed, selector};
use crate::utils::{decode_text, resolve_url};
use async_trait::async_trait;
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

/// `(title, category number, slug suffix after the city name)`
type Category = (&'static str, u32, &'static str);

const VANCOUVER: &[Category] = &[
    ("要聞", 52, "要聞"),
    ("加國新聞", 54, "加國"),
    ("省市", 65, "省市"),
    ("社區新聞", 55, "社區"),
    ("港聞", 57, "港聞"),
    ("國際", 56, "國際"),
    ("中國", 58, "中國"),
    ("台灣", 59, "台灣"),
    ("財經", 61, "財經"),
    ("體育", 60, "體育"),
    ("娛樂", 62, "娛樂"),
];

const TORONTO: &[Category] = &[
    ("要聞", 52, "要聞"),
    ("加國新聞", 54, "加國"),
    ("城市", 53, "城市"),
    ("港聞", 57, "港聞"),
    ("國際", 56, "國際"),
    ("中國", 58, "中國"),
    ("台灣", 59, "台灣"),
    ("財經", 61, "財經"),
    ("體育", 60, "體育"),
    ("娛樂", 62, "娛樂"),
];

const CALGARY: &[Category] = &[
    ("要聞", 52, "要聞"),
    ("加國新聞", 54, "加國"),
    ("省市", 65, "省市"),
    ("港聞", 57, "港聞"),
    ("國際", 56, "國際"),
    ("中國", 58, "中國"),
    ("台灣", 59, "台灣"),
    ("財經", 61, "財經"),
    ("體育", 60, "體育"),
    ("娛樂", 62, "娛樂"),
];

pub fn adapters() -> Vec<Adapter> {
    vec![
        SingTao::adapter(
            "singtaovancouver",
            "星島日報(溫哥華)",
            "vancouver",
            "溫哥華",
            VANCOUVER,
        ),
        SingTao::adapter(
            "singtaotoronto",
            "星島日報(多倫多)",
            "toronto",
            "多倫多",
            TORONTO,
        ),
        SingTao::adapter(
            "singtaocalgary",
            "星島日報(卡加利)",
            "calgary",
            "卡加利",
            CALGARY,
        ),
    ]
}

pub struct SingTao {
    id: &'static str,
    edition: &'static str,
    city: &'static str,
    categories: &'static [Category],
}

impl SingTao {
    fn adapter(
        id: &'static str,
        description: &'static str,
        edition: &'static str,
        city: &'static str,
        categories: &'static [Category],
    ) -> Adapter {
        let scraper = SingTao {
            id,
            edition,
            city,
            categories,
        };
        Adapter::new(id, description, Strategy::custom(scraper))
    }

    pub fn category_url(&self, number: u32, suffix: &str) -> String {
        let slug = format!("{number}-{}{suffix}", self.city);
        format!(
            "https://www.singtao.ca/category/{}/?variant=zh-hk",
            urlencoding::encode(&slug)
        )
    }

    async fn section(&self, ctx: &Context<'_>, url: &str) -> Result<Vec<Entry>, ScrapeError> {
        let request = FetchRequest::get(url).cookie("edition", self.edition);
        let bytes = ctx
            .fetcher
            .fetch(request)
            .await
            .ok_or_else(|| ScrapeError::NoData(url.to_string()))?;
        let page = Url::parse(url).map_err(|source| ScrapeError::Url {
            url: url.to_string(),
            source,
        })?;
        parse_category(&decode_text(&bytes, None), &page)
    }
}

#[async_trait]
impl Scrape for SingTao {
    #[instrument(level = "info", skip_all, fields(source = self.id))]
    async fn scrape(&self, ctx: &Context<'_>) -> Vec<Entry> {
        let mut out = Vec::new();
        for (title, number, suffix) in self.categories {
            out.push(make_section(title));
            let url = self.category_url(*number, suffix);
            match self.section(ctx, &url).await {
                Ok(articles) => {
                    debug!(section = %title, count = articles.len(), "Parsed category");
                    out.extend(articles);
                }
                Err(e) => section_failed(self.id, title, &e),
            }
        }
        out
    }
}

/// Top story first, then the category list, all from the first main
/// content column.
pub fn parse_category(html: &str, page: &Url) -> Result<Vec<Entry>, ScrapeError> {
    let main = selector("div.td-ss-main-content")?;
    let top_link = selector("div.cat-header-image > a")?;
    let top_text = selector("div h3")?;
    let list = selector("div.td-animation-stack div.item-details > h3 > a")?;
    let document = Html::parse_document(html);

    let Some(column) = document.select(&main).next() else {
        return Ok(Vec::new());
    };

    let top = column.select(&top_link).next().and_then(|a| {
        let href = a.value().attr("href")?;
        let text = element_text(&a.select(&top_text).next()?);
        make_article(&text, &resolve_url(page, href)?, None)
    });

    let listed = column.select(&list).filter_map(|a| {
        let href = a.value().attr("href")?;
        make_article(&element_text(&a), &resolve_url(page, href)?, None)
    });

    Ok(top.into_iter().chain(listed).collect())
}
