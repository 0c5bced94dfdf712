//! Dashboard catalog
//!
//! The catalog is a fixed, ordered list. Order is display order.

use crate::types::Accent;

/// One summary entry on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Identifier, shared with the detail table
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Accent color
    pub color: Accent,
}

const ITEMS: &[CatalogItem] = &[
    CatalogItem {
        id: "1",
        title: "React Native",
        description: "Build native apps using React",
        icon: "⚛️",
        color: Accent::from_u32(0x61DAFB),
    },
    CatalogItem {
        id: "2",
        title: "Expo",
        description: "Universal app platform",
        icon: "📱",
        color: Accent::from_u32(0x000020),
    },
    CatalogItem {
        id: "3",
        title: "TypeScript",
        description: "Typed JavaScript at any scale",
        icon: "🔷",
        color: Accent::from_u32(0x3178C6),
    },
    CatalogItem {
        id: "4",
        title: "Maestro",
        description: "Mobile UI testing framework",
        icon: "🎭",
        color: Accent::from_u32(0xFF6B6B),
    },
    CatalogItem {
        id: "5",
        title: "Expo Router",
        description: "File-based routing for React Native",
        icon: "🧭",
        color: Accent::from_u32(0x6C63FF),
    },
];

/// Read-only handle over the static catalog
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    items: &'static [CatalogItem],
}

impl Catalog {
    /// The built-in catalog
    pub const fn builtin() -> Self {
        Self { items: ITEMS }
    }

    /// All entries, in display order
    pub fn list(&self) -> &'static [CatalogItem] {
        self.items
    }

    /// Entry at a display position
    pub fn get(&self, index: usize) -> Option<&'static CatalogItem> {
        self.items.get(index)
    }

    /// Entry with the given identifier
    pub fn find(&self, id: &str) -> Option<&'static CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Display position of an identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let titles: Vec<&str> = Catalog::builtin().list().iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            ["React Native", "Expo", "TypeScript", "Maestro", "Expo Router"]
        );
    }

    #[test]
    fn test_catalog_fields_non_empty() {
        for item in Catalog::builtin().list() {
            assert!(!item.id.is_empty());
            assert!(!item.title.is_empty());
            assert!(!item.description.is_empty());
            assert!(!item.icon.is_empty());
            assert!(!item.color.to_string().is_empty());
        }
    }

    #[test]
    fn test_ids_unique() {
        let catalog = Catalog::builtin();
        for (i, item) in catalog.list().iter().enumerate() {
            assert_eq!(catalog.position(item.id), Some(i));
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("4").map(|i| i.title), Some("Maestro"));
        assert!(catalog.find("999").is_none());
        assert!(catalog.get(5).is_none());
    }
}
