//! Navigation stack and navigator
//!
//! The stack always holds at least one entry. `push` grows it, `replace`
//! swaps the top in place, and `back` shrinks it unless only the root
//! remains.

use tracing::{debug, error};

use crate::error::Result;
use crate::route::{RouteDef, RouteId, RouteParams, RouteTable};

/// One visited screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    /// The route being shown
    pub route: RouteId,
    /// Route parameters, if any
    pub params: Option<RouteParams>,
}

impl NavigationEntry {
    pub fn new(route: RouteId, params: Option<RouteParams>) -> Self {
        Self { route, params }
    }

    /// Item identifier parameter, if present
    pub fn item_id(&self) -> Option<&str> {
        self.params.as_ref().map(|p| p.id.as_str())
    }
}

/// Ordered history of visited routes, never empty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<NavigationEntry>,
}

impl NavigationStack {
    /// Create a stack holding only the root entry
    pub fn new(root: NavigationEntry) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// The visible entry
    pub fn top(&self) -> &NavigationEntry {
        // `entries` is non-empty from construction and `pop` keeps the root.
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, entry: NavigationEntry) {
        self.entries.push(entry);
    }

    /// Overwrite the visible entry, keeping the length
    pub fn replace_top(&mut self, entry: NavigationEntry) {
        let last = self.entries.len() - 1;
        self.entries[last] = entry;
    }

    /// Remove the visible entry unless it is the root
    pub fn pop(&mut self) -> Option<NavigationEntry> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Entries from root to top
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }
}

/// Drives the navigation stack through the route table
#[derive(Clone, Debug)]
pub struct Navigator {
    table: RouteTable,
    stack: NavigationStack,
}

impl Navigator {
    /// Create a navigator showing the table's initial route
    pub fn new(table: RouteTable) -> Self {
        let root = NavigationEntry::new(table.initial(), None);
        Self {
            table,
            stack: NavigationStack::new(root),
        }
    }

    /// Show a new screen on top of the current one
    pub fn push(&mut self, route_id: &str, params: Option<RouteParams>) -> Result<()> {
        let def = self.validate(route_id)?;
        debug!(route = route_id, depth = self.stack.len() + 1, "push");
        self.stack.push(NavigationEntry::new(def.id, params));
        Ok(())
    }

    /// Swap the current screen without adding history
    pub fn replace(&mut self, route_id: &str, params: Option<RouteParams>) -> Result<()> {
        let def = self.validate(route_id)?;
        debug!(
            route = route_id,
            from = %self.stack.top().route,
            "replace"
        );
        self.stack.replace_top(NavigationEntry::new(def.id, params));
        Ok(())
    }

    /// Return to the previous screen; false when already at the root
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(left) => {
                debug!(from = %left.route, to = %self.stack.top().route, "back");
                true
            }
            None => false,
        }
    }

    /// Alias of [`Navigator::back`]
    pub fn pop(&mut self) -> bool {
        self.back()
    }

    /// The visible entry
    pub fn current(&self) -> &NavigationEntry {
        self.stack.top()
    }

    /// Route definition of the visible entry
    pub fn current_def(&self) -> &'static RouteDef {
        self.table.get(self.stack.top().route)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether `back` would move
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Titles from root to top, for the header trail
    pub fn breadcrumb(&self) -> Vec<&'static str> {
        self.stack
            .entries()
            .iter()
            .map(|entry| self.table.get(entry.route).title)
            .collect()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn validate(&self, route_id: &str) -> Result<&'static RouteDef> {
        self.table.resolve(route_id).map_err(|e| {
            error!(route = route_id, "Navigation to unknown route");
            e
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(RouteTable::builtin())
    }
}
