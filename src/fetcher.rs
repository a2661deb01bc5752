//! The shared HTTP layer.
//!
//! [`HttpFetcher`] wraps one `reqwest` client configured to look like a
//! desktop browser: browser header set, rustls capped at TLS 1.2 (which
//! leaves only the ECDHE + AES-GCM / ChaCha20 suites on offer), a fixed
//! timeout and no retries. Every failure is logged and turned into `None`;
//! callers treat a missing body as an ordinary outcome.

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::utils::truncate_for_log;
use async_trait::async_trait;
use itertools::Itertools;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, tls};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const SEC_CH_UA: &str = r#""Microsoft Edge";v="131", "Chromium";v="131", "Not_A Brand";v="24""#;
const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// A single request: url, method, optional cookies, header overrides and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub method: Method,
    pub cookies: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            cookies: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            body: Some(body.into()),
            ..Self::get(url)
        }
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<'a>(
        mut self,
        pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>,
    ) -> Self {
        for (name, value) in pairs {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// `name=value; name2=value2`, or `None` without cookies.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .join("; "),
        )
    }
}

/// Anything that can turn a [`FetchRequest`] into a response body.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Perform the request. `None` means no usable data for any reason.
    async fn fetch(&self, request: FetchRequest) -> Option<Vec<u8>>;

    async fn get(&self, url: &str) -> Option<Vec<u8>> {
        self.fetch(FetchRequest::get(url)).await
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .use_rustls_tls()
            .max_tls_version(tls::Version::TLS_1_2)
            .user_agent(config.user_agent.as_str())
            .default_headers(browser_headers(config)?)
            .connect_timeout(timeout)
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(cookie) = request.cookie_header() {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let transport = |source| FetchError::Transport {
            url: request.url.clone(),
            source,
        };
        let res = builder.send().await.map_err(transport)?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }
        let bytes = res.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(url = %request.url, method = ?request.method))]
    async fn fetch(&self, request: FetchRequest) -> Option<Vec<u8>> {
        match self.try_fetch(&request).await {
            Ok(bytes) => {
                let preview = truncate_for_log(&String::from_utf8_lossy(&bytes), 200);
                debug!(
                    bytes = bytes.len(),
                    preview = %preview.replace('\n', " "),
                    "Fetched page"
                );
                Some(bytes)
            }
            Err(e) => {
                warn!(error = %e, url = %request.url, "Problem reading http page");
                None
            }
        }
    }
}

/// Browser-like defaults plus configured extras; configured extras win.
fn browser_headers(config: &FetchConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert("pragma", HeaderValue::from_static("no-cache"));
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));
    headers.insert("accept", HeaderValue::from_static(ACCEPT));
    headers.insert("sec-ch-ua", HeaderValue::from_static(SEC_CH_UA));

    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::Header {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| FetchError::Header {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned [`Fetch`] for offline tests.

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct CannedFetcher {
        responses: HashMap<String, Vec<u8>>,
        calls: Mutex<Vec<FetchRequest>>,
    }

    impl CannedFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.responses.insert(url.to_string(), body.into());
            self
        }

        pub fn requests(&self) -> Vec<FetchRequest> {
            self.calls.lock().unwrap().clone()
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests().into_iter().map(|r| r.url).collect()
        }
    }

    #[async_trait]
    impl Fetch for CannedFetcher {
        async fn fetch(&self, request: FetchRequest) -> Option<Vec<u8>> {
            let body = self.responses.get(&request.url).cloned();
            self.calls.lock().unwrap().push(request);
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CannedFetcher;
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_cookie_header_joined() {
        let req = FetchRequest::get("https://a.example")
            .cookie("edition", "vancouver")
            .cookie("lang", "zh");
        assert_eq!(req.cookie_header().as_deref(), Some("edition=vancouver; lang=zh"));
        assert!(FetchRequest::get("https://a.example").cookie_header().is_none());
    }

    #[test]
    fn test_post_request() {
        let req = FetchRequest::post("https://a.example", "page=2")
            .header("X-Requested-With", "XMLHttpRequest");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body.as_deref(), Some("page=2"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_browser_headers_override() {
        let mut config = FetchConfig::default();
        config.headers = BTreeMap::from([("Accept".to_string(), "application/json".to_string())]);
        let headers = browser_headers(&config).unwrap();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("pragma").unwrap(), "no-cache");
    }

    #[test]
    fn test_invalid_header_rejected() {
        let mut config = FetchConfig::default();
        config.headers = BTreeMap::from([("bad header".to_string(), "x".to_string())]);
        assert!(matches!(
            browser_headers(&config),
            Err(FetchError::Header { .. })
        ));
    }

    #[tokio::test]
    async fn test_client_builds() {
        assert!(HttpFetcher::new(&FetchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_none() {
        let mut config = FetchConfig::default();
        config.timeout_secs = 2;
        let fetcher = HttpFetcher::new(&config).unwrap();
        // Port 9 on localhost is discard; nothing listens there in CI.
        assert!(fetcher.get("http://127.0.0.1:9/feed").await.is_none());
    }

    #[tokio::test]
    async fn test_canned_records_calls() {
        let fetcher = CannedFetcher::new().with("https://a.example/feed", "ok");
        assert_eq!(fetcher.get("https://a.example/feed").await.unwrap(), b"ok");
        assert!(fetcher.get("https://a.example/missing").await.is_none());
        assert_eq!(
            fetcher.urls(),
            vec!["https://a.example/feed", "https://a.example/missing"]
        );
    }
}
