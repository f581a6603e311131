//! Boutique (tenant) configuration types.

use compact_str::{CompactString, format_compact};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity and presentation of one boutique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutiqueConfig {
    /// Human-readable display name.
    pub name: String,
    /// Marketing copy shown on the storefront.
    pub description: String,
    pub theme: Theme,
}

/// Color palette applied to every page of a boutique.
///
/// Renderers may only rely on `primary`, `secondary` and `accent`.
/// Tenant-specific overrides (e.g. `black`) live in `extra` and are
/// serialized next to the required keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Theme {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Add a tenant-specific color override.
    pub fn with_extra(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.extra.insert(key.into(), color.into());
        self
    }

    /// Iterate over every `(key, color)` pair, required keys first.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Navigation entry pointing at a boutique storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutiqueLink {
    pub slug: CompactString,
    pub name: String,
    /// Storefront path, always `/<slug>`.
    pub path: CompactString,
}

impl BoutiqueLink {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: CompactString::from(slug),
            name: name.to_owned(),
            path: format_compact!("/{slug}"),
        }
    }
}

/// Response body for a successful boutique lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBoutique {
    pub slug: CompactString,
    #[serde(flatten)]
    pub config: BoutiqueConfig,
}

/// Response body for an unknown slug.
///
/// Always lists the known boutiques so the caller can render a not-found
/// page with navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutiqueNotFound {
    pub error: String,
    pub slug: CompactString,
    pub boutiques: Vec<BoutiqueLink>,
}
