//! Extended detail content, keyed by catalog identifier
//!
//! Lookups never fail: an unknown identifier resolves to the entry for
//! [`DEFAULT_DETAIL_ID`](crate::DEFAULT_DETAIL_ID). Detail identifiers can come
//! from deep links, so a miss is an expected input.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::types::Accent;
use crate::DEFAULT_DETAIL_ID;

/// Extended content for a single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: Accent,
    /// Short description, shown under the title
    pub description: &'static str,
    /// Long-form text for the "About" section
    pub details: &'static str,
    /// Feature bullet points, in display order
    pub features: &'static [&'static str],
}

const DETAILS: &[ItemDetail] = &[
    ItemDetail {
        id: "1",
        title: "React Native",
        icon: "⚛️",
        color: Accent::from_u32(0x61DAFB),
        description: "Build native apps using React",
        details: "React Native lets you build mobile apps using only JavaScript and React. \
                  It uses the same design as React, letting you compose a rich mobile UI \
                  from declarative components.",
        features: &[
            "Cross-platform development",
            "Hot reloading",
            "Native components",
            "Large community",
            "Reusable code",
        ],
    },
    ItemDetail {
        id: "2",
        title: "Expo",
        icon: "📱",
        color: Accent::from_u32(0x000020),
        description: "Universal app platform",
        details: "Expo is an open-source platform for making universal native apps for \
                  Android, iOS, and the web with JavaScript and React.",
        features: &[
            "Over-the-air updates",
            "Managed workflow",
            "Rich SDK",
            "Easy deployment",
            "Development builds",
        ],
    },
    ItemDetail {
        id: "3",
        title: "TypeScript",
        icon: "🔷",
        color: Accent::from_u32(0x3178C6),
        description: "Typed JavaScript at any scale",
        details: "TypeScript extends JavaScript by adding types. By understanding \
                  JavaScript, TypeScript saves you time catching errors and providing \
                  fixes before you run code.",
        features: &[
            "Static type checking",
            "IDE support",
            "Latest ECMAScript features",
            "Gradual adoption",
            "Rich type system",
        ],
    },
    ItemDetail {
        id: "4",
        title: "Maestro",
        icon: "🎭",
        color: Accent::from_u32(0xFF6B6B),
        description: "Mobile UI testing framework",
        details: "Maestro is a mobile UI testing framework that provides a simple and \
                  effective way to automate end-to-end testing for mobile apps.",
        features: &[
            "Simple YAML syntax",
            "Cross-platform",
            "CI/CD integration",
            "Visual testing",
            "Flake-resistant",
        ],
    },
    ItemDetail {
        id: "5",
        title: "Expo Router",
        icon: "🧭",
        color: Accent::from_u32(0x6C63FF),
        description: "File-based routing for React Native",
        details: "Expo Router is a file-based router for React Native and web apps. It \
                  allows you to manage navigation between screens in your app using files \
                  in the app directory.",
        features: &[
            "File-based routing",
            "Deep linking",
            "Type-safe navigation",
            "Universal links",
            "Nested layouts",
        ],
    },
];

/// Lookup table from identifier to detail, built once at startup
#[derive(Debug, Clone)]
pub struct DetailTable {
    entries: HashMap<&'static str, &'static ItemDetail>,
    fallback: &'static ItemDetail,
}

impl DetailTable {
    /// Build the table over the built-in detail data
    pub fn builtin() -> Self {
        let entries: HashMap<_, _> = DETAILS.iter().map(|d| (d.id, d)).collect();
        let fallback = entries
            .get(DEFAULT_DETAIL_ID)
            .copied()
            .unwrap_or(&DETAILS[0]);

        Self { entries, fallback }
    }

    /// Resolve an identifier, falling back to the default entry on a miss
    pub fn resolve(&self, id: &str) -> &'static ItemDetail {
        match self.entries.get(id) {
            Some(detail) => *detail,
            None => {
                tracing::debug!(requested = id, "Unknown detail id, using default");
                self.fallback
            }
        }
    }

    /// Exact lookup without fallback
    pub fn get(&self, id: &str) -> Option<&'static ItemDetail> {
        self.entries.get(id).copied()
    }

    /// Whether an identifier has its own entry
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// The entry served on misses
    pub fn fallback(&self) -> &'static ItemDetail {
        self.fallback
    }

    /// Catalog identifiers with no detail entry of their own
    pub fn missing_for(&self, catalog: &Catalog) -> Vec<&'static str> {
        catalog
            .list()
            .iter()
            .filter(|item| !self.contains(item.id))
            .map(|item| item.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DetailTable {
    fn default() -> Self {
        Self::builtin()
    }
}
