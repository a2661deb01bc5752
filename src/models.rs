use serde::{Deserialize, Serialize};

/// One element of the output stream.
///
/// A `Section` is a heading that groups the articles following it; the
/// serialized form is untagged so the stream reads as plain
/// `{"title": ...}` / `{"title", "url", "abstract"}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Article(Article),
    Section(Section),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
}

impl Entry {
    pub fn is_section(&self) -> bool {
        matches!(self, Entry::Section(_))
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Article(a) => &a.title,
            Entry::Section(s) => &s.title,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Entry::Article(a) => Some(&a.url),
            Entry::Section(_) => None,
        }
    }
}

/// Entry in the source listing: `{"path": id, "desc": description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(rename = "path")]
    pub id: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}

pub fn make_section(title: &str) -> Entry {
    Entry::Section(Section {
        title: title.trim().to_string(),
    })
}

/// Build an article entry.
///
/// Title, url and abstract are trimmed; an empty title or url yields `None`
/// and an empty abstract collapses to `None`.
pub fn make_article(title: &str, url: &str, summary: Option<&str>) -> Option<Entry> {
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() || url.is_empty() {
        return None;
    }
    let summary = summary
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(Entry::Article(Article {
        title: title.to_string(),
        url: url.to_string(),
        summary,
    }))
}
