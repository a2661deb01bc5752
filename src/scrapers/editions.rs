//! Daily newspapers whose section pages live under a dated edition path.

use crate::source::Adapter;
use crate::strategies::{EditionSpec, ListingSpec, Strategy};

const MINGPAO_EDITION: &str = r"htm/News/([0-9]{8})/main_r\.htm";

pub fn adapters() -> Vec<Adapter> {
    vec![mingpaovancouver(), mingpaotoronto(), libertytimes()]
}

fn mingpao_listing(region: &str, sections: &[(&str, &str)]) -> ListingSpec {
    sections.iter().fold(
        ListingSpec::new("h4.listing-link > a").encoding(encoding_rs::BIG5),
        |spec, (title, page)| {
            spec.section(
                title,
                &format!("http://www.mingpaocanada.com/{region}/htm/News/{{edition}}/{page}"),
            )
        },
    )
}

pub(crate) fn mingpaovancouver() -> Adapter {
    let edition =
        EditionSpec::new("http://www.mingpaocanada.com/Van/", "#mp-menu a", MINGPAO_EDITION);
    let listing = mingpao_listing(
        "Van",
        &[
            ("要聞", "VAindex_r.htm"),
            ("加國新聞", "VBindex_r.htm"),
            ("社區新聞", "VDindex_r.htm"),
            ("港聞", "HK-VGindex_r.htm"),
            ("國際", "VTindex_r.htm"),
            ("中國", "VCindex_r.htm"),
            ("經濟", "VEindex_r.htm"),
            ("體育", "VSindex_r.htm"),
            ("影視", "HK-MAindex_r.htm"),
            ("副刊", "WWindex_r.htm"),
        ],
    );
    Adapter::new(
        "mingpaovancouver",
        "明報加西版(溫哥華)",
        Strategy::Edition(edition, listing),
    )
}

pub(crate) fn mingpaotoronto() -> Adapter {
    let edition =
        EditionSpec::new("http://www.mingpaocanada.com/TOR/", "#mp-menu a", MINGPAO_EDITION);
    let listing = mingpao_listing(
        "TOR",
        &[
            ("要聞", "TAindex_r.htm"),
            ("加國新聞", "TDindex_r.htm"),
            ("地產", "TRindex_r.htm"),
            ("中國", "TCAindex_r.htm"),
            ("國際", "TTAindex_r.htm"),
            ("港聞", "HK-GAindex_r.htm"),
            ("經濟", "THindex_r.htm"),
            ("體育", "TSindex_r.htm"),
            ("影視", "HK-MAindex_r.htm"),
            ("副刊", "WWindex_r.htm"),
        ],
    );
    Adapter::new(
        "mingpaotoronto",
        "明報加東版(多倫多)",
        Strategy::Edition(edition, listing),
    )
}

pub(crate) fn libertytimes() -> Adapter {
    let edition = EditionSpec::new("http://news.ltn.com.tw/newspaper/", "#box300B", r"^(\d{8})$")
        .attribute("title");
    let sections = [
        ("焦點", "focus"),
        ("政治", "politics"),
        ("社會", "society"),
        ("地方", "local"),
        ("生活", "life"),
        ("言論", "opinion"),
        ("國際", "world"),
        ("財經", "business"),
        ("體育", "sports"),
        ("娛樂", "entertainment"),
        ("消費", "consumer"),
        ("副刊", "supplement"),
    ];
    let listing = sections.iter().fold(
        ListingSpec::new("#newslistul a.picword")
            .paged("page")
            .last_page("#page .p_num"),
        |spec, (title, slug)| {
            spec.section(
                title,
                &format!("http://news.ltn.com.tw/newspaper/{slug}/{{edition}}"),
            )
        },
    );
    Adapter::new("libertytimes", "自由時報", Strategy::Edition(edition, listing))
}
