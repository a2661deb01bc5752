//! Publishers that only need their RSS / RDF feeds listed.

use super::icons;
use crate::source::Adapter;
use crate::strategies::Strategy;

pub fn adapters() -> Vec<Adapter> {
    vec![
        mingpaohk(),
        Adapter::new(
            "stheadline",
            "星島頭條",
            Strategy::feeds(&[("星島頭條", "https://www.stheadline.com/rss")]),
        )
        .icon("https://www.stheadline.com/favicon.ico"),
        scmp(),
        etnet(),
        Adapter::new(
            "hkfp",
            "Hong Kong Free Press",
            Strategy::feeds(&[("Hong Kong Free Press", "https://www.hongkongfp.com/feed/")]),
        )
        .icon(icons::HKFP),
        Adapter::new(
            "points-media",
            "Points Media 棱角媒體",
            Strategy::feeds(&[("最新", "https://points-media.com/feed/")]),
        )
        .icon("https://points-media.com/favicon.ico"),
        Adapter::new(
            "photon-media",
            "Photon Media 光傳媒",
            Strategy::feeds(&[("光傳媒", "https://photonmedia.net/feed/")]),
        )
        .icon(icons::PHOTON_MEDIA),
        Adapter::new(
            "channel-c",
            "Channel C HK",
            Strategy::feeds(&[("Channel C HK", "https://channelchk.com/rss")]),
        )
        .icon("https://channelchk.com/favicon.ico"),
        Adapter::new(
            "hk-court-news",
            "庭刊",
            Strategy::feeds(&[("庭刊", "https://hkcourtnews.com/feed/")]),
        )
        .icon("https://hkcourtnews.com/favicon.ico"),
        orientaldailyrss(),
        Adapter::new(
            "metrohk",
            "香港都市日報 (Metro Daily)",
            Strategy::feeds(&[("香港都市日報", "http://www.metrohk.com.hk/desktopRSS.php")]),
        ),
        Adapter::new(
            "vancouversun",
            "Vancouver Sun",
            Strategy::feeds(&[("Vancouver News, Top Stories", "https://vancouversun.com/feed")]),
        ),
        cbcnews(),
        torontostar(),
        nationalpost(),
        Adapter::new(
            "bbcworld",
            "BBC World",
            Strategy::feeds(&[
                ("World", "http://feeds.bbci.co.uk/news/world/rss.xml"),
                ("Asia", "http://feeds.bbci.co.uk/news/world/asia/rss.xml"),
            ]),
        ),
        ftchinese(),
        Adapter::new(
            "dw",
            "德國之聲",
            Strategy::rdf(&[("德國之聲", "http://rss.dw.com/rdf/rss-chi-all")]),
        ),
        Adapter::new(
            "wsjcn",
            "華爾街日報",
            Strategy::feeds(&[("華爾街日報", "https://cn.wsj.com/zh-hant/rss")]),
        ),
        Adapter::new(
            "rfa_cantonese_rss",
            "RFA 粵語部 RSS",
            Strategy::feeds(&[(
                "RFA 自由亞洲電台粵語部",
                "https://www.rfa.org/cantonese/rss2.xml",
            )]),
        ),
        Adapter::new(
            "rfa_english_rss",
            "Radio Free Asia RSS",
            Strategy::feeds(&[("Radio Free Asia", "https://www.rfa.org/english/rss2.xml")]),
        ),
        the_independent(),
    ]
}

fn mingpaohk() -> Adapter {
    Adapter::new(
        "mingpaohk",
        "明報(香港)",
        Strategy::feeds(&[
            ("要聞", "http://news.mingpao.com/rss/pns/s00001.xml"),
            ("港聞", "http://news.mingpao.com/rss/pns/s00002.xml"),
            ("經濟", "http://news.mingpao.com/rss/pns/s00004.xml"),
            ("娛樂", "http://news.mingpao.com/rss/pns/s00016.xml"),
            ("社評‧筆陣", "http://news.mingpao.com/rss/pns/s00003.xml"),
            ("觀點", "http://news.mingpao.com/rss/pns/s00012.xml"),
            ("國際", "http://news.mingpao.com/rss/pns/s00014.xml"),
            ("體育", "http://news.mingpao.com/rss/pns/s00015.xml"),
            ("副刊", "http://news.mingpao.com/rss/pns/s00005.xml"),
            ("深度報道", "http://news.mingpao.com/rss/pns/s00285.xml"),
            ("偵查報道", "http://news.mingpao.com/rss/pns/s00287.xml"),
        ]),
    )
    .icon("https://news.mingpao.com/favicon.ico")
}

fn scmp() -> Adapter {
    Adapter::new(
        "scmp",
        "South China Morning Post",
        Strategy::feeds(&[
            ("News", "https://www.scmp.com/rss/91/feed"),
            ("Business", "https://www.scmp.com/rss/92/feed"),
            ("Tech", "https://www.scmp.com/rss/36/feed"),
            ("Life", "https://www.scmp.com/rss/94/feed"),
            ("Culture", "https://www.scmp.com/rss/322296/feed"),
            ("Sport", "https://www.scmp.com/rss/95/feed"),
        ]),
    )
    .icon("https://www.scmp.com/favicon.ico")
}

fn etnet() -> Adapter {
    Adapter::new(
        "etnet",
        "經濟通",
        Strategy::feeds(&[
            ("精選新聞", "http://www.etnet.com.hk/www/tc/news/rss.php?section=editor"),
            ("焦點專題", "http://www.etnet.com.hk/www/tc/news/rss.php?section=special"),
            ("股市傳聞", "http://www.etnet.com.hk/www/tc/news/rss.php?section=rumour"),
            ("股票評論", "http://www.etnet.com.hk/www/tc/news/rss.php?section=commentary"),
        ]),
    )
    .icon("http://www.etnet.com.hk/favicon.ico")
}

fn orientaldailyrss() -> Adapter {
    Adapter::new(
        "orientaldailyrss",
        "東方日報RSS(香港)",
        Strategy::feeds(&[
            ("要聞港聞", "http://orientaldaily.on.cc/rss/news.xml"),
            ("兩岸國際", "http://orientaldaily.on.cc/rss/china_world.xml"),
            ("財經", "http://orientaldaily.on.cc/rss/finance.xml"),
            ("娛樂", "http://orientaldaily.on.cc/rss/entertainment.xml"),
            ("副刊", "http://orientaldaily.on.cc/rss/lifestyle.xml"),
        ]),
    )
    .icon("http://orientaldaily.on.cc/favicon.ico")
}

pub(crate) fn cbcnews() -> Adapter {
    Adapter::new(
        "cbcnews",
        "CBC News",
        Strategy::feeds(&[
            ("Top Stories", "http://rss.cbc.ca/lineup/topstories.xml"),
            ("World", "http://rss.cbc.ca/lineup/world.xml"),
            ("Canada", "http://rss.cbc.ca/lineup/canada.xml"),
            ("Technology & Science", "http://rss.cbc.ca/lineup/technology.xml"),
            ("Politics", "http://rss.cbc.ca/lineup/politics.xml"),
            ("Business", "http://rss.cbc.ca/lineup/business.xml"),
            ("Health", "http://rss.cbc.ca/lineup/health.xml"),
            ("Art & Entertainment", "http://rss.cbc.ca/lineup/arts.xml"),
            ("Offbeat", "http://rss.cbc.ca/lineup/offbeat.xml"),
            ("Aboriginal", "http://www.cbc.ca/cmlink/rss-cbcaboriginal"),
        ]),
    )
}

fn torontostar() -> Adapter {
    Adapter::new(
        "torontostar",
        "Toronto Star",
        Strategy::feeds(&[
            ("News", "http://www.thestar.com/feeds.articles.news.rss"),
            ("Your Toronto", "http://www.thestar.com/feeds.articles.yourtoronto.rss"),
            ("Opinion", "http://www.thestar.com/feeds.articles.opinion.rss"),
            ("Sports", "http://www.thestar.com/feeds.articles.sports.rss"),
            ("Business", "http://www.thestar.com/feeds.articles.business.rss"),
            ("Entertainment", "http://www.thestar.com/feeds.articles.entertainment.rss"),
            ("Life", "http://www.thestar.com/feeds.articles.life.rss"),
            ("Autos", "http://www.thestar.com/feeds.articles.autos.rss"),
        ]),
    )
}

fn nationalpost() -> Adapter {
    Adapter::new(
        "nationalpost",
        "National Post",
        Strategy::feeds(&[
            ("News", "http://news.nationalpost.com/category/news/feed"),
            ("Comment", "http://news.nationalpost.com/category/full-comment/feed"),
            ("Personal Finance", "http://business.financialpost.com/category/personal-finance/feed"),
            ("Tech", "http://business.financialpost.com/category/fp-tech-desk/feed"),
            ("Sports", "http://news.nationalpost.com/category/sports/feed"),
            ("Arts", "http://news.nationalpost.com/category/arts/feed"),
            ("Life", "http://news.nationalpost.com/category/life/feed"),
            ("Health", "http://news.nationalpost.com/category/health/feed"),
        ]),
    )
}

fn ftchinese() -> Adapter {
    Adapter::new(
        "ftchinese",
        "FT中文网",
        Strategy::feeds(&[
            ("每日更新", "http://big5.ftchinese.com/rss/feed"),
            ("今日焦点", "http://big5.ftchinese.com/rss/news"),
            ("十大熱門文章", "http://big5.ftchinese.com/rss/hotstoryby7day"),
            ("生活時尚", "http://big5.ftchinese.com/rss/lifestyle"),
            ("《馬丁 沃爾夫》", "http://big5.ftchinese.com/rss/column/007000012"),
        ]),
    )
}

fn the_independent() -> Adapter {
    Adapter::new(
        "the_independent",
        "The Independent",
        Strategy::feeds(&[
            ("News", "https://www.independent.co.uk/news/rss"),
            ("Sport", "https://www.independent.co.uk/sport/rss"),
            ("Life & Style", "https://www.independent.co.uk/life-style/rss"),
            ("Arts & Entertainment", "https://www.independent.co.uk/arts-entertainment/rss"),
            ("Travel", "https://www.independent.co.uk/travel/rss"),
            ("Money", "https://www.independent.co.uk/money/rss"),
        ]),
    )
    .icon(icons::THE_INDEPENDENT)
}
