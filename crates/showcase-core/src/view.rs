//! View selection: which data a screen renders

use crate::catalog::{Catalog, CatalogItem};
use crate::detail::{DetailTable, ItemDetail};
use crate::navigator::NavigationEntry;
use crate::route::RouteId;
use crate::DEFAULT_DETAIL_ID;

/// Data needed to draw the visible screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Login,
    Dashboard {
        items: &'static [CatalogItem],
    },
    Detail {
        /// The identifier that was asked for, which may differ from
        /// `detail.id` after a fallback
        requested_id: &'a str,
        detail: &'static ItemDetail,
    },
}

/// The full catalog, unmodified and in display order
pub fn resolve_catalog(catalog: &Catalog) -> &'static [CatalogItem] {
    catalog.list()
}

/// Detail for an identifier, or the default entry when it is unknown
pub fn resolve_detail(details: &DetailTable, id: &str) -> &'static ItemDetail {
    details.resolve(id)
}

/// Select the view for a navigation entry
pub fn select<'a>(
    entry: &'a NavigationEntry,
    catalog: &Catalog,
    details: &DetailTable,
) -> View<'a> {
    match entry.route {
        RouteId::Login => View::Login,
        RouteId::Dashboard => View::Dashboard {
            items: resolve_catalog(catalog),
        },
        RouteId::Detail => {
            let requested_id = entry.item_id().unwrap_or(DEFAULT_DETAIL_ID);
            View::Detail {
                requested_id,
                detail: resolve_detail(details, requested_id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteParams;

    #[test]
    fn test_select_dashboard() {
        let entry = NavigationEntry::new(RouteId::Dashboard, None);
        match select(&entry, &Catalog::builtin(), &DetailTable::builtin()) {
            View::Dashboard { items } => assert_eq!(items.len(), 5),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_select_detail_with_fallback() {
        let entry = NavigationEntry::new(RouteId::Detail, Some(RouteParams::id("999")));
        match select(&entry, &Catalog::builtin(), &DetailTable::builtin()) {
            View::Detail {
                requested_id,
                detail,
            } => {
                assert_eq!(requested_id, "999");
                assert_eq!(detail.id, "1");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_select_detail_without_param() {
        let entry = NavigationEntry::new(RouteId::Detail, None);
        let view = select(&entry, &Catalog::builtin(), &DetailTable::builtin());
        assert!(matches!(view, View::Detail { detail, .. } if detail.id == DEFAULT_DETAIL_ID));
    }

    #[test]
    fn test_select_login() {
        let entry = NavigationEntry::new(RouteId::Login, None);
        assert_eq!(
            select(&entry, &Catalog::builtin(), &DetailTable::builtin()),
            View::Login
        );
    }
}
