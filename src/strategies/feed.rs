//! Syndication feeds: RSS 2.0 (plus Atom) and RDF.
//!
//! Parsing is event based (`quick-xml`) and deliberately forgiving: end
//! tag names are not checked, stray closing tags are ignored, and a syntax
//! error costs one unit of an error budget instead of the whole document.
//! Items missing a title or a link are dropped individually.

use super::{FeedSection, section_failed};
use crate::error::ScrapeError;
use crate::models::{Entry, make_article, make_section};
use crate::source::Context;
use crate::utils::{decode_text, truncate_for_log};
use quick_xml::Reader;
use quick_xml::escape;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info, instrument, warn};

const MAX_XML_ERRORS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSchema {
    /// `rss/channel/item` (or Atom `feed/entry`) by exact element name.
    Rss,
    /// `RDF/item` by local name, whatever prefix the publisher declared.
    Rdf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl FeedItem {
    pub fn into_entry(self) -> Option<Entry> {
        make_article(
            self.title.as_deref()?,
            self.link.as_deref()?,
            self.description.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
}

/// Walk feed sections in order, emitting a heading then the items of each.
#[instrument(level = "info", skip_all, fields(%source, ?schema))]
pub async fn run(
    ctx: &Context<'_>,
    source: &str,
    sections: &[FeedSection],
    schema: FeedSchema,
) -> Vec<Entry> {
    let mut out = Vec::new();
    for section in sections {
        out.push(make_section(&section.title));
        match fetch_items(ctx, &section.url, schema).await {
            Ok(items) => {
                let before = out.len();
                out.extend(items.into_iter().filter_map(FeedItem::into_entry));
                info!(section = %section.title, count = out.len() - before, "Parsed feed section");
            }
            Err(e) => section_failed(source, &section.title, &e),
        }
    }
    out
}

/// Fetch and parse one feed.
pub async fn fetch_items(
    ctx: &Context<'_>,
    url: &str,
    schema: FeedSchema,
) -> Result<Vec<FeedItem>, ScrapeError> {
    let bytes = ctx
        .fetcher
        .get(url)
        .await
        .ok_or_else(|| ScrapeError::NoData(url.to_string()))?;
    let text = decode_text(&bytes, None);
    Ok(parse_feed(&text, schema))
}

/// Parse every recoverable item out of `xml`.
pub fn parse_feed(xml: &str, schema: FeedSchema) -> Vec<FeedItem> {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut path: Vec<String> = Vec::new();
    let mut items = Vec::new();
    // (depth of the item element, item being filled)
    let mut current: Option<(usize, FeedItem)> = None;
    // (depth of the field element, field, accumulated text)
    let mut field: Option<(usize, Field, String)> = None;
    let mut errors = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                path.push(element_name(&e, schema));
                let depth = path.len();
                if current.is_none() && is_item_path(&path, schema) {
                    current = Some((depth, FeedItem::default()));
                    continue;
                }
                if let Some((item_depth, item)) = current.as_mut() {
                    if depth == *item_depth + 1 {
                        let name = path[depth - 1].as_str();
                        if name == "link" {
                            if let Some(href) = atom_href(&e) {
                                item.link.get_or_insert(href);
                            }
                        }
                        field = field_for(name).map(|f| (depth, f, String::new()));
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some((item_depth, item)) = current.as_mut() {
                    let name = element_name(&e, schema);
                    if path.len() == *item_depth && name == "link" {
                        if let Some(href) = atom_href(&e) {
                            item.link.get_or_insert(href);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = match schema {
                    FeedSchema::Rss => String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    FeedSchema::Rdf => {
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
                    }
                };
                // Stray closing tags are ignored; a known one closes everything inside it.
                let Some(pos) = path.iter().rposition(|n| *n == name) else {
                    continue;
                };
                let depth = pos + 1;
                if field.as_ref().is_some_and(|(d, _, _)| *d >= depth) {
                    if let (Some((_, which, text)), Some((_, item))) =
                        (field.take(), current.as_mut())
                    {
                        store(item, which, text);
                    }
                }
                if current.as_ref().is_some_and(|(d, _)| *d >= depth) {
                    if let Some((_, item)) = current.take() {
                        items.push(item);
                    }
                }
                path.truncate(pos);
            }
            Ok(Event::Text(t)) => {
                if let Some((_, _, buf)) = field.as_mut() {
                    let raw = String::from_utf8_lossy(&t);
                    match escape::unescape(&raw) {
                        Ok(unescaped) => buf.push_str(&unescaped),
                        Err(_) => buf.push_str(&raw),
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let Some((_, _, buf)) = field.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if let Some((_, _, buf)) = field.as_mut() {
                    let name = String::from_utf8_lossy(&r).into_owned();
                    match r.resolve_char_ref() {
                        Ok(Some(ch)) => buf.push(ch),
                        // Sloppy feeds use HTML entities like `&nbsp;` without declaring them.
                        _ => match escape::resolve_predefined_entity(&name)
                            .or_else(|| escape::resolve_html5_entity(&name))
                        {
                            Some(s) => buf.push_str(s),
                            None => {
                                buf.push('&');
                                buf.push_str(&name);
                                buf.push(';');
                            }
                        },
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                errors += 1;
                warn!(
                    error = %e,
                    offset = reader.buffer_position(),
                    errors,
                    "XML parse error; recovering"
                );
                if errors >= MAX_XML_ERRORS {
                    break;
                }
            }
        }
    }

    // A truncated document can leave the last item open.
    if let Some((_, mut item)) = current.take() {
        if let Some((_, which, text)) = field.take() {
            store(&mut item, which, text);
        }
        items.push(item);
    }

    debug!(
        count = items.len(),
        preview = %truncate_for_log(xml, 120).replace('\n', " "),
        "Parsed feed"
    );
    items
}

fn element_name(e: &BytesStart<'_>, schema: FeedSchema) -> String {
    match schema {
        FeedSchema::Rss => String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        FeedSchema::Rdf => String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
    }
}

fn is_item_path(path: &[String], schema: FeedSchema) -> bool {
    match schema {
        FeedSchema::Rss => {
            matches!(
                path,
                [rss, channel, item] if rss == "rss" && channel == "channel" && item == "item"
            ) || matches!(path, [feed, entry] if feed == "feed" && entry == "entry")
        }
        FeedSchema::Rdf => matches!(path, [rdf, item] if rdf == "RDF" && item == "item"),
    }
}

fn field_for(name: &str) -> Option<Field> {
    match name {
        "title" => Some(Field::Title),
        "link" => Some(Field::Link),
        "description" | "summary" | "content" => Some(Field::Description),
        _ => None,
    }
}

fn store(item: &mut FeedItem, which: Field, text: String) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    let slot = match which {
        Field::Title => &mut item.title,
        Field::Link => &mut item.link,
        Field::Description => &mut item.description,
    };
    if slot.is_none() {
        *slot = Some(text.to_string());
    }
}

/// `href` of an Atom `<link>` that points at the article itself.
fn atom_href(e: &BytesStart<'_>) -> Option<String> {
    let mut href = None;
    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        match attr.key.as_ref() {
            b"href" => href = Some(value),
            b"rel" if value != "alternate" => return None,
            _ => {}
        }
    }
    href.map(|h| match escape::unescape(&h) {
        Ok(cow) => cow.into_owned(),
        Err(_) => h,
    })
}
