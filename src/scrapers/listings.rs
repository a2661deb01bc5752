//! Publishers scraped from their HTML index pages.

use crate::source::Adapter;
use crate::strategies::{ListingSpec, Strategy};

pub fn adapters() -> Vec<Adapter> {
    vec![singpao(), takungpao(), hket(), hkej(), rfa_cantonese()]
}

pub(crate) fn singpao() -> Adapter {
    let spec = ListingSpec::new("td > a.list_title")
        .paged("page")
        .last_page("a.fpagelist_css")
        .sections(&[
            ("要聞港聞", "http://www.singpao.com.hk/index.php?fi=news1"),
            ("兩岸國際", "http://www.singpao.com.hk/index.php?fi=news8"),
            ("財經", "http://www.singpao.com.hk/index.php?fi=news3"),
            ("娛樂", "http://www.singpao.com.hk/index.php?fi=news4"),
            ("體育", "http://www.singpao.com.hk/index.php?fi=news5"),
            ("副刊", "http://www.singpao.com.hk/index.php?fi=news7"),
        ]);
    Adapter::new("singpao", "香港成報", Strategy::Listing(spec))
}

pub(crate) fn takungpao() -> Adapter {
    let spec = ListingSpec::new("div.list_tuwen > div.content")
        .link("ul.txt > li.title > a")
        .summary("ul.txt > li.intro > a")
        .sections(&[
            ("港聞", "http://www.takungpao.com.hk/hongkong/"),
            ("內地", "http://www.takungpao.com.hk/mainland/"),
            ("台灣", "http://www.takungpao.com.hk/taiwan/"),
            ("國際", "http://www.takungpao.com.hk/international/"),
            ("評論", "http://www.takungpao.com.hk/opinion/"),
            ("經濟", "http://www.takungpao.com.hk/finance/"),
            ("文化", "http://www.takungpao.com.hk/culture/"),
            ("體育", "http://www.takungpao.com.hk/sports/"),
            ("娛樂", "http://www.takungpao.com.hk/ent/"),
        ]);
    Adapter::new("takungpao", "大公網", Strategy::Listing(spec))
        .icon("https://www.takungpao.com.hk/favicon.ico")
}

pub(crate) fn hket() -> Adapter {
    let spec = ListingSpec::new(concat!(
        "div.listing-widget-33 > a.listing-overlay, ",
        "div.listing-widget-4 > a.listing-overlay, ",
        "div.listing-widget-9 > a.listing-overlay"
    ))
    .paged("p")
    .sections(&[
        ("即市財經", "https://inews.hket.com/sran009/即市財經"),
        ("理財", "https://wealth.hket.com/"),
        ("科技", "https://inews.hket.com/sran010/科技"),
        ("中國", "https://china.hket.com/"),
        ("國際", "https://inews.hket.com/sran011/國際"),
        ("商業", "https://inews.hket.com/sran012/商業"),
    ]);
    Adapter::new("hket", "香港經濟日報", Strategy::Listing(spec))
        .icon("https://inews.hket.com/favicon.ico")
}

pub(crate) fn hkej() -> Adapter {
    let spec = ListingSpec::new("div.more-articles-dd-wrapper form select option")
        .href_attr("value")
        .sections(&[
            ("要聞", "https://www1.hkej.com/dailynews"),
            ("理財投資", "https://www1.hkej.com/dailynews/investment"),
            ("時事評論", "https://www1.hkej.com/dailynews/commentary"),
            ("財經新聞", "https://www1.hkej.com/dailynews/finnews"),
            ("地產市道", "https://www1.hkej.com/dailynews/property"),
            ("政壇脈搏", "https://www1.hkej.com/dailynews/politics"),
            ("獨眼", "https://www1.hkej.com/dailynews/views"),
            ("兩岸消息", "https://www1.hkej.com/dailynews/cntw"),
            ("EJ Global", "https://www1.hkej.com/dailynews/international"),
            ("副刊文化", "https://www1.hkej.com/dailynews/culture"),
        ]);
    Adapter::new("hkej", "信報財經", Strategy::Listing(spec))
        .icon("https://www1.hkej.com/favicon.ico")
}

pub(crate) fn rfa_cantonese() -> Adapter {
    let spec = ListingSpec::new(concat!(
        "div[id*=topstorywidefull], div.sectionteaser, ",
        "div.single_column_teaser, div.two_featured"
    ))
    .link("h2 > a")
    .text("h2 > a > span")
    .summary("p")
    .sections(&[
        ("新聞", "https://www.rfa.org/cantonese/news"),
        ("港澳台新聞", "https://www.rfa.org/cantonese/news/htm"),
        ("評論", "https://www.rfa.org/cantonese/commentaries"),
        ("聚言堂", "https://www.rfa.org/cantonese/talkshows"),
        ("專題", "https://www.rfa.org/cantonese/features/hottopic"),
        ("多媒體", "https://www.rfa.org/cantonese/multimedia"),
    ]);
    Adapter::new("rfa_cantonese", "RFA 粵語部", Strategy::Listing(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::CannedFetcher;
    use crate::models::Entry;
    use crate::source::Source;
    use crate::source::testing::context;
    use crate::strategies::listing::parse_page;
    use url::Url;

    fn spec_of(adapter: &Adapter) -> &ListingSpec {
        match adapter.strategy() {
            Strategy::Listing(spec) => spec,
            _ => panic!("{} should be a listing adapter", adapter.id()),
        }
    }

    #[test]
    fn test_takungpao_items_with_intro() {
        let adapter = takungpao();
        let html = r#"<div class="list_tuwen">
<div class="content"><ul class="txt">
<li class="title"><a href="http://www.takungpao.com.hk/news/1.html">港聞一</a></li>
<li class="intro"><a href="http://www.takungpao.com.hk/news/1.html"> 導語 </a></li>
</ul></div>
<div class="content"><ul class="txt"><li class="title"><a href="/news/2.html">港聞二</a></li></ul></div>
</div>"#;
        let url = Url::parse("http://www.takungpao.com.hk/hongkong/").unwrap();
        let page = parse_page(html, &url, spec_of(&adapter)).unwrap();

        assert_eq!(page.articles.len(), 2);
        match &page.articles[0] {
            Entry::Article(a) => assert_eq!(a.summary.as_deref(), Some("導語")),
            _ => panic!("expected article"),
        }
        assert_eq!(page.articles[1].url(), Some("http://www.takungpao.com.hk/news/2.html"));
    }

    #[test]
    fn test_hket_widgets() {
        let adapter = hket();
        let html = r#"
<div class="listing-widget-33"><a class="listing-overlay" href="/article/1">一</a></div>
<div class="listing-widget-4"><a class="listing-overlay" href="https://inews.hket.com/article/2">二</a></div>
<div class="listing-widget-9"><a class="listing-overlay" href="/article/3">三</a></div>
<div class="listing-widget-1"><a class="listing-overlay" href="/article/4">四</a></div>"#;
        let url = Url::parse("https://wealth.hket.com/?p=1").unwrap();
        let page = parse_page(html, &url, spec_of(&adapter)).unwrap();

        let urls: Vec<_> = page.articles.iter().filter_map(|e| e.url()).collect();
        assert_eq!(
            urls,
            vec![
                "https://wealth.hket.com/article/1",
                "https://inews.hket.com/article/2",
                "https://wealth.hket.com/article/3",
            ]
        );
    }

    #[test]
    fn test_rfa_cantonese_span_titles() {
        let adapter = rfa_cantonese();
        let html = r#"
<div id="topstorywidefull-1"><h2><a href="/cantonese/news/a.html"><span>頭條</span></a></h2><p>摘要</p></div>
<div class="sectionteaser"><h2><a href="/cantonese/news/b.html"><span>第二</span></a></h2></div>
<div class="two_featured"><h3>no link</h3></div>"#;
        let url = Url::parse("https://www.rfa.org/cantonese/news").unwrap();
        let page = parse_page(html, &url, spec_of(&adapter)).unwrap();

        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.articles[0].title(), "頭條");
        assert_eq!(
            page.articles[0].url(),
            Some("https://www.rfa.org/cantonese/news/a.html")
        );
    }

    #[tokio::test]
    async fn test_hkej_reads_option_values() {
        let mut fetcher = CannedFetcher::new();
        fetcher = fetcher.with(
            "https://www1.hkej.com/dailynews",
            r#"<div class="more-articles-dd-wrapper"><form><select>
<option value="">--</option>
<option value="/dailynews/headline/article/1">頭條</option>
</select></form></div>"#,
        );
        let entries = hkej().articles(&context(&fetcher)).await;

        // Ten headings, one article under the first.
        assert_eq!(entries.iter().filter(|e| e.is_section()).count(), 10);
        assert_eq!(
            entries[1].url(),
            Some("https://www1.hkej.com/dailynews/headline/article/1")
        );
    }

    #[tokio::test]
    async fn test_singpao_walks_pages() {
        let page = |n: u32| {
            format!(
                r#"<table><tr><td><a class="list_title" href="index.php?id={n}">第{n}則</a></td></tr></table>
<a class="fpagelist_css">1</a><a class="fpagelist_css">2</a>"#
            )
        };
        let fetcher = CannedFetcher::new()
            .with("http://www.singpao.com.hk/index.php?fi=news1&page=1", page(1))
            .with("http://www.singpao.com.hk/index.php?fi=news1&page=2", page(2));
        let entries = singpao().articles(&context(&fetcher)).await;

        assert_eq!(entries[0].title(), "要聞港聞");
        assert_eq!(entries[1].url(), Some("http://www.singpao.com.hk/index.php?id=1"));
        assert_eq!(entries[2].url(), Some("http://www.singpao.com.hk/index.php?id=2"));
        assert_eq!(entries[3].title(), "兩岸國際");
    }
}
