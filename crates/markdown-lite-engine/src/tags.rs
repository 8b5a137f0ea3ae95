//! # Tag Registry
//!
//! Maps each [`BlockKind`] to the HTML tag name it renders with. A registry is
//! fixed once built; the default table is shared process-wide through
//! [`TagRegistry::global`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::blocks::BlockKind;
use crate::blocks::kinds::Paragraph;

static GLOBAL: LazyLock<TagRegistry> = LazyLock::new(TagRegistry::default);

/// Read-only lookup table from block kind to tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    entries: HashMap<BlockKind, String>,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::from_entries([
            (BlockKind::Paragraph, "p"),
            (BlockKind::Header1, "h1"),
            (BlockKind::Header2, "h2"),
            (BlockKind::Header3, "h3"),
            (BlockKind::Header4, "h4"),
            (BlockKind::Header5, "h5"),
            (BlockKind::Header6, "h6"),
            (BlockKind::Bullet, "li"),
            (BlockKind::HorizontalRule, "hr"),
        ])
    }
}

impl TagRegistry {
    /// The shared default registry.
    pub fn global() -> &'static TagRegistry {
        &GLOBAL
    }

    /// Builds a registry holding only the given entries.
    ///
    /// Kinds without an entry resolve to the paragraph tag.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (BlockKind, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(kind, name)| (kind, name.into()))
                .collect(),
        }
    }

    /// The default table with some tag names replaced.
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (BlockKind, S)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for (kind, name) in overrides {
            registry.entries.insert(kind, name.into());
        }
        registry
    }

    /// Tag name for `kind`, falling back to the paragraph tag.
    pub fn tag_name(&self, kind: BlockKind) -> &str {
        self.entries
            .get(&kind)
            .or_else(|| self.entries.get(&BlockKind::Paragraph))
            .map(String::as_str)
            .unwrap_or(Paragraph::TAG)
    }

    pub fn opening_tag(&self, kind: BlockKind) -> String {
        format!("<{}>", self.tag_name(kind))
    }

    pub fn closing_tag(&self, kind: BlockKind) -> String {
        format!("</{}>", self.tag_name(kind))
    }
}
