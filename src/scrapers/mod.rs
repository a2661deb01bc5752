//! The built-in publisher catalog.

pub mod am730;
pub mod editions;
pub mod feeds;
pub mod hackernews;
mod icons;
pub mod initium;
pub mod listings;
pub mod oriental;
pub mod singtao;

use crate::source::{Adapter, Source};

/// Every built-in source, in listing order.
pub fn catalog() -> Vec<Box<dyn Source>> {
    let mut adapters: Vec<Adapter> = Vec::new();
    adapters.extend(feeds::adapters());
    adapters.extend(listings::adapters());
    adapters.extend(editions::adapters());
    adapters.push(oriental::adapter());
    adapters.extend(singtao::adapters());
    adapters.push(am730::adapter());
    adapters.push(initium::adapter());
    adapters.push(hackernews::adapter());

    adapters
        .into_iter()
        .map(|a| Box::new(a) as Box<dyn Source>)
        .collect()
}
