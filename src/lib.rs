//! Listing-level news aggregation over a catalog of publisher adapters.
//!
//! Each [`Source`] turns one publisher's feeds or index pages into a flat
//! stream of [`Entry`] values: a section heading followed by that section's
//! articles. [`NewsSum`] is the entry point for callers.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod registry;
pub mod scrapers;
pub mod service;
pub mod source;
pub mod strategies;
pub mod utils;

pub use cache::{ArticleCache, MemoryCache};
pub use config::{Config, load_config};
pub use error::{ConfigError, FetchError, NewsError, RegistryError, ScrapeError};
pub use fetcher::{Fetch, FetchRequest, HttpFetcher};
pub use models::{Article, Entry, Section, SourceInfo};
pub use registry::Registry;
pub use service::NewsSum;
pub use source::{Adapter, Context, Source};
