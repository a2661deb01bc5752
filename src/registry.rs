//! id → source mapping, built once from the catalog.

use crate::error::RegistryError;
use crate::models::SourceInfo;
use crate::scrapers;
use crate::source::Source;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::{info, instrument};

static GLOBAL: OnceCell<Registry> = OnceCell::new();

pub struct Registry {
    sources: Vec<Box<dyn Source>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Validate `sources` and index them by id, keeping declaration order.
    ///
    /// Any invalid id, empty description or repeated id fails the build.
    #[instrument(level = "info", skip_all, fields(count = sources.len()))]
    pub fn build(sources: Vec<Box<dyn Source>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(sources.len());
        for (i, source) in sources.iter().enumerate() {
            validate(source.as_ref())?;
            if index.insert(source.id().to_string(), i).is_some() {
                return Err(RegistryError::DuplicateId(source.id().to_string()));
            }
        }
        info!(sources = sources.len(), "Registry built");
        Ok(Self { sources, index })
    }

    /// The process-wide registry over the built-in catalog.
    pub fn global() -> Result<&'static Registry, RegistryError> {
        GLOBAL.get_or_try_init(|| Registry::build(scrapers::catalog()))
    }

    pub fn get(&self, id: &str) -> Option<&dyn Source> {
        self.index.get(id).map(|&i| self.sources[i].as_ref())
    }

    pub fn list(&self) -> Vec<SourceInfo> {
        self.sources
            .iter()
            .map(|s| SourceInfo {
                id: s.id().to_string(),
                desc: s.description().to_string(),
                icon: s.icon().map(str::to_string),
            })
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.id())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn validate(source: &dyn Source) -> Result<(), RegistryError> {
    let id = source.id();
    let invalid = |reason: &str| RegistryError::InvalidAdapter {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.is_empty() {
        return Err(invalid("empty id"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(invalid("id may only contain [A-Za-z0-9_-]"));
    }
    if source.description().trim().is_empty() {
        return Err(invalid("empty description"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Adapter;
    use crate::strategies::Strategy;

    fn adapter(id: &'static str, desc: &'static str) -> Box<dyn Source> {
        Box::new(Adapter::new(id, desc, Strategy::feeds(&[("News", "https://a.example/rss")])))
    }

    #[test]
    fn test_build_keeps_order_and_indexes() {
        let registry = Registry::build(vec![
            adapter("zeta", "Zeta"),
            adapter("alpha", "Alpha"),
            adapter("mid-1_x", "Mid"),
        ])
        .unwrap();

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid-1_x"]);
        assert_eq!(registry.get("alpha").unwrap().description(), "Alpha");
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let err = Registry::build(vec![adapter("cbcnews", "CBC"), adapter("cbcnews", "CBC again")])
            .err()
            .unwrap();
        assert_eq!(err, RegistryError::DuplicateId("cbcnews".to_string()));
    }

    #[test]
    fn test_invalid_ids_fail() {
        for bad in ["", "has space", "slash/id", "點"] {
            let result = Registry::build(vec![adapter(bad, "Desc")]);
            assert!(
                matches!(result, Err(RegistryError::InvalidAdapter { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_description_fails() {
        assert!(matches!(
            Registry::build(vec![adapter("ok", "  ")]),
            Err(RegistryError::InvalidAdapter { .. })
        ));
    }

    #[test]
    fn test_list_shape() {
        let source: Box<dyn Source> = Box::new(
            Adapter::new("the_independent", "The Independent", Strategy::feeds(&[]))
                .icon("https://x.example/icon.png"),
        );
        let registry = Registry::build(vec![source]).unwrap();
        let listed = registry.list();
        assert_eq!(listed[0].id, "the_independent");
        assert_eq!(listed[0].icon.as_deref(), Some("https://x.example/icon.png"));
    }

    #[test]
    fn test_global_is_shared() {
        let a = Registry::global().unwrap();
        let b = Registry::global().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }
}
