//! Boutique resolution.
//!
//! Maps a requested slug to its configuration. A miss is an ordinary
//! outcome: callers get a [`NotFoundError`] and are expected to render a
//! not-found page using [`BoutiqueResolver::fallback_links`].

use crate::registry::BoutiqueRegistry;
use compact_str::CompactString;
use marche_sdk::objects::{BoutiqueConfig, BoutiqueLink};
use std::sync::Arc;
use thiserror::Error;

/// The requested slug is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("boutique not found: {slug}")]
pub struct NotFoundError {
    pub slug: CompactString,
}

/// Read-only resolver over a shared [`BoutiqueRegistry`].
///
/// Cloning is cheap; every clone points at the same registry.
#[derive(Debug, Clone)]
pub struct BoutiqueResolver {
    registry: Arc<BoutiqueRegistry>,
}

impl BoutiqueResolver {
    pub fn new(registry: Arc<BoutiqueRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve `slug` by exact string equality.
    pub fn resolve(&self, slug: &str) -> Result<&BoutiqueConfig, NotFoundError> {
        self.registry.get(slug).ok_or_else(|| NotFoundError {
            slug: CompactString::from(slug),
        })
    }

    /// Links offered on the not-found page. Never empty.
    pub fn fallback_links(&self) -> Vec<BoutiqueLink> {
        self.registry.links()
    }

    pub fn registry(&self) -> &BoutiqueRegistry {
        &self.registry
    }
}
