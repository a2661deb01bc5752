use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;
use url::Url;

static XML_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<\?xml[^>]*encoding\s*=\s*["']([A-Za-z0-9._-]+)["']"#)
        .expect("xml encoding regex")
});
static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9._-]+)"#).expect("meta charset regex")
});

/// Truncate a string for logging purposes
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Decode a fetched document to UTF-8.
///
/// Order: explicit `forced` encoding, byte-order mark, XML declaration,
/// HTML `<meta charset>`, then UTF-8. Malformed sequences become U+FFFD.
pub fn decode_text<'a>(bytes: &'a [u8], forced: Option<&'static Encoding>) -> Cow<'a, str> {
    if let Some(encoding) = forced {
        let (text, _, _) = encoding.decode(bytes);
        return text;
    }
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return text;
    }

    let head_len = bytes.len().min(1024);
    let head = String::from_utf8_lossy(&bytes[..head_len]);
    let declared = XML_ENCODING
        .captures(head.trim_start())
        .or_else(|| META_CHARSET.captures(&head))
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()));

    let encoding = declared.unwrap_or(encoding_rs::UTF_8);
    debug!(encoding = encoding.name(), "Decoding document");
    let (text, _, _) = encoding.decode(bytes);
    text
}

/// Resolve `href` against `base`, keeping only http(s) results.
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let resolved = base.join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

/// Append `param=page` to the query of `url`.
pub fn paged_url(url: &Url, param: &str, page: u32) -> Url {
    let mut paged = url.clone();
    paged
        .query_pairs_mut()
        .append_pair(param, &page.to_string());
    paged
}
