//! Optional response cache in front of [`crate::service::NewsSum`].

use crate::models::Entry;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// Storage for a source's last entry list.
pub trait ArticleCache: Send + Sync {
    fn get(&self, id: &str) -> Option<Vec<Entry>>;

    fn set(&self, id: &str, entries: &[Entry], ttl: Duration);
}

/// In-process cache; entries expire `ttl` after they were stored.
#[derive(Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, (Instant, Vec<Entry>)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleCache for MemoryCache {
    fn get(&self, id: &str) -> Option<Vec<Entry>> {
        let mut slots = self.slots.lock().ok()?;
        match slots.get(id) {
            Some((expires, entries)) if Instant::now() < *expires => {
                debug!(%id, "Cache hit");
                Some(entries.clone())
            }
            Some(_) => {
                debug!(%id, "Cache entry expired");
                slots.remove(id);
                None
            }
            None => None,
        }
    }

    fn set(&self, id: &str, entries: &[Entry], ttl: Duration) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(id.to_string(), (Instant::now() + ttl, entries.to_vec()));
        }
    }
}
