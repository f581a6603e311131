//! Boutique registry.
//!
//! The process-wide table of known boutiques. It is validated and built once
//! at startup, then shared read-only (typically behind an `Arc`) with every
//! request handler. There is no way to add, remove or edit an entry after
//! construction.

use compact_str::CompactString;
use marche_sdk::objects::{BoutiqueConfig, BoutiqueLink, Theme};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building a [`BoutiqueRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry must contain at least one boutique")]
    Empty,

    #[error("invalid slug {0:?}: expected non-empty [a-z0-9_-]")]
    InvalidSlug(String),

    #[error("duplicate boutique slug {0:?}")]
    DuplicateSlug(String),

    #[error("boutique {slug:?}: {field} must not be empty")]
    EmptyField { slug: String, field: &'static str },

    #[error("boutique {slug:?}: theme color {key} = {value:?} is not a hex color")]
    InvalidColor {
        slug: String,
        key: String,
        value: String,
    },
}

/// Immutable mapping from slug to [`BoutiqueConfig`].
#[derive(Debug, Clone)]
pub struct BoutiqueRegistry {
    entries: HashMap<CompactString, BoutiqueConfig>,
    /// Slugs in registration order.
    order: Vec<CompactString>,
}

impl BoutiqueRegistry {
    /// Build a registry from `(slug, config)` pairs.
    ///
    /// Every entry is checked; the first invalid one aborts construction so a
    /// registry never holds a partial configuration.
    pub fn new<S, I>(entries: I) -> Result<Self, RegistryError>
    where
        S: Into<CompactString>,
        I: IntoIterator<Item = (S, BoutiqueConfig)>,
    {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for (slug, config) in entries {
            let slug: CompactString = slug.into();
            validate_slug(&slug)?;
            validate_config(&slug, &config)?;
            if map.contains_key(&slug) {
                return Err(RegistryError::DuplicateSlug(slug.into_string()));
            }
            order.push(slug.clone());
            map.insert(slug, config);
        }

        if order.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self {
            entries: map,
            order,
        })
    }

    /// The default two-boutique table.
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        Self {
            order: entries.iter().map(|(slug, _)| slug.clone()).collect(),
            entries: entries.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, slug: &str) -> Option<&BoutiqueConfig> {
        self.entries.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Known slugs in registration order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(CompactString::as_str)
    }

    /// `(slug, config)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoutiqueConfig)> {
        self.order
            .iter()
            .filter_map(|slug| self.entries.get(slug).map(|c| (slug.as_str(), c)))
    }

    /// Navigation links to every known boutique.
    pub fn links(&self) -> Vec<BoutiqueLink> {
        self.iter()
            .map(|(slug, config)| BoutiqueLink::new(slug, &config.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn builtin_entries() -> Vec<(CompactString, BoutiqueConfig)> {
    vec![
        (
            CompactString::from("marche_241"),
            BoutiqueConfig {
                name: "Marché241".to_owned(),
                description: "La marketplace du Gabon : mode, beauté, maison et bien plus, \
                              livrés partout à Libreville."
                    .to_owned(),
                theme: Theme::new("#000000", "#f3f4f6", "#2563eb"),
            },
        ),
        (
            CompactString::from("boutique_de_joline"),
            BoutiqueConfig {
                name: "Boutique de Joline".to_owned(),
                description: "Vêtements, accessoires et cosmétiques sélectionnés avec soin \
                              par Joline."
                    .to_owned(),
                theme: Theme::new("#fdf2f8", "#db2777", "#9d174d").with_extra("black", "#1f2937"),
            },
        ),
    ]
}

fn validate_slug(slug: &str) -> Result<(), RegistryError> {
    let valid = !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidSlug(slug.to_owned()))
    }
}

fn validate_config(slug: &str, config: &BoutiqueConfig) -> Result<(), RegistryError> {
    let empty = |field| RegistryError::EmptyField {
        slug: slug.to_owned(),
        field,
    };
    if config.name.trim().is_empty() {
        return Err(empty("name"));
    }
    if config.description.trim().is_empty() {
        return Err(empty("description"));
    }
    for (key, value) in config.theme.colors() {
        if !is_hex_color(value) {
            return Err(RegistryError::InvalidColor {
                slug: slug.to_owned(),
                key: key.to_owned(),
                value: value.to_owned(),
            });
        }
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str, primary: &str) -> BoutiqueConfig {
        BoutiqueConfig {
            name: name.to_owned(),
            description: "Une boutique".to_owned(),
            theme: Theme::new(primary, "#ffffff", "#123456"),
        }
    }

    #[test]
    fn test_builtin_entries_are_valid() {
        let rebuilt = BoutiqueRegistry::new(builtin_entries());
        assert!(rebuilt.is_ok());

        let builtin = BoutiqueRegistry::builtin();
        assert_eq!(builtin.len(), 2);
        let slugs: Vec<&str> = builtin.slugs().collect();
        assert_eq!(slugs, vec!["marche_241", "boutique_de_joline"]);
    }

    #[test]
    fn test_builtin_joline_carries_black_override() {
        let builtin = BoutiqueRegistry::builtin();
        let joline = builtin.get("boutique_de_joline");
        assert_eq!(
            joline.and_then(|c| c.theme.extra.get("black")).map(String::as_str),
            Some("#1f2937")
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let registry = BoutiqueRegistry::builtin();
        assert!(registry.get("marche_241").is_some());
        assert!(registry.get("Marche_241").is_none());
        assert!(registry.get("marche_241 ").is_none());
        assert!(registry.get("marche").is_none());
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_rejects_empty_table() {
        let entries: Vec<(&str, BoutiqueConfig)> = Vec::new();
        assert_eq!(
            BoutiqueRegistry::new(entries).err(),
            Some(RegistryError::Empty)
        );
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let result = BoutiqueRegistry::new([
            ("shop", config("A", "#000")),
            ("shop", config("B", "#000")),
        ]);
        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateSlug("shop".to_owned()))
        );
    }

    #[test]
    fn test_rejects_bad_slugs() {
        for slug in ["", "Shop", "shop/admin", "é"] {
            let result = BoutiqueRegistry::new([(slug, config("A", "#000"))]);
            assert_eq!(
                result.err(),
                Some(RegistryError::InvalidSlug(slug.to_owned())),
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = BoutiqueRegistry::new([("shop", config("  ", "#000"))]);
        assert_eq!(
            result.err(),
            Some(RegistryError::EmptyField {
                slug: "shop".to_owned(),
                field: "name",
            })
        );
    }

    #[test]
    fn test_rejects_bad_extra_color() {
        let mut cfg = config("A", "#000");
        cfg.theme = cfg.theme.with_extra("black", "noir");
        let result = BoutiqueRegistry::new([("shop", cfg)]);
        assert!(matches!(
            result,
            Err(RegistryError::InvalidColor { ref key, .. }) if key == "black"
        ));
    }

    #[test]
    fn test_hex_color_shapes() {
        assert!(is_hex_color("#000"));
        assert!(is_hex_color("#db2777"));
        assert!(is_hex_color("#DB2777"));
        assert!(!is_hex_color("db2777"));
        assert!(!is_hex_color("#db27"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_links_follow_registration_order() {
        let links = BoutiqueRegistry::new([
            ("zeta", config("Zeta", "#000")),
            ("alpha", config("Alpha", "#000")),
        ])
        .map(|registry| registry.links())
        .unwrap_or_default();
        let paths: Vec<&str> = links.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/zeta", "/alpha"]);
    }
}
