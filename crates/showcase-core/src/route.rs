//! Static route table

use std::fmt;
use std::str::FromStr;

use crate::error::{NavError, Result};

/// Identifier of a navigable screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    /// Credential entry, the initial screen
    Login,
    /// Catalog list
    Dashboard,
    /// Single catalog entry, parameterized by item id
    Detail,
}

impl RouteId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteId::Login => "login",
            RouteId::Dashboard => "dashboard",
            RouteId::Detail => "detail",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        RouteTable::builtin()
            .routes()
            .iter()
            .find(|def| def.id.as_str() == s)
            .map(|def| def.id)
            .ok_or_else(|| NavError::RouteNotFound(s.to_string()))
    }
}

/// Parameters carried by a navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteParams {
    /// Item identifier, passed through unvalidated
    pub id: String,
}

impl RouteParams {
    pub fn id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Definition of one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub id: RouteId,
    /// Path pattern, `[id]` marks the parameter segment
    pub path: &'static str,
    /// Header title
    pub title: &'static str,
    /// Whether the header bar is drawn at all
    pub header_shown: bool,
    /// Whether the header offers a back affordance
    pub back_visible: bool,
}

impl RouteDef {
    /// Whether entries for this route carry an item parameter
    pub fn is_parameterized(&self) -> bool {
        self.path.contains("[id]")
    }
}

const ROUTES: &[RouteDef] = &[
    RouteDef {
        id: RouteId::Login,
        path: "/",
        title: "Login",
        header_shown: false,
        back_visible: false,
    },
    RouteDef {
        id: RouteId::Dashboard,
        path: "/dashboard",
        title: "Dashboard",
        header_shown: true,
        back_visible: false,
    },
    RouteDef {
        id: RouteId::Detail,
        path: "/detail/[id]",
        title: "Detail",
        header_shown: true,
        back_visible: true,
    },
];

/// Immutable table of every route the app knows
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDef],
}

impl RouteTable {
    pub const fn builtin() -> Self {
        Self { routes: ROUTES }
    }

    pub fn routes(&self) -> &'static [RouteDef] {
        self.routes
    }

    /// Look up a route by its string identifier
    pub fn resolve(&self, route_id: &str) -> Result<&'static RouteDef> {
        self.routes
            .iter()
            .find(|def| def.id.as_str() == route_id)
            .ok_or_else(|| NavError::RouteNotFound(route_id.to_string()))
    }

    /// Definition for a typed identifier
    pub fn get(&self, id: RouteId) -> &'static RouteDef {
        // Every RouteId variant has a row in ROUTES.
        self.routes
            .iter()
            .find(|def| def.id == id)
            .unwrap_or(&ROUTES[0])
    }

    /// The screen shown at process start
    pub fn initial(&self) -> RouteId {
        RouteId::Login
    }

    /// Map a deep-link path to a route and its parameters
    ///
    /// Accepts `/`, `/login`, `/dashboard` and `/detail/<id>`. Leading and
    /// trailing slashes are optional.
    pub fn resolve_path(&self, path: &str) -> Result<(RouteId, Option<RouteParams>)> {
        let trimmed = path.trim().trim_matches('/');
        let mut segments = trimmed.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) | (Some("login"), None, None) => Ok((RouteId::Login, None)),
            (Some("dashboard"), None, None) => Ok((RouteId::Dashboard, None)),
            (Some("detail"), Some(id), None) if !id.is_empty() => {
                Ok((RouteId::Detail, Some(RouteParams::id(id))))
            }
            _ => Err(NavError::RouteNotFound(path.to_string())),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        let table = RouteTable::builtin();
        assert_eq!(table.resolve("login").unwrap().id, RouteId::Login);
        assert_eq!(table.resolve("dashboard").unwrap().id, RouteId::Dashboard);
        assert_eq!(table.resolve("detail").unwrap().id, RouteId::Detail);
    }

    #[test]
    fn test_resolve_unknown_route() {
        let table = RouteTable::builtin();
        assert_eq!(
            table.resolve("nonexistent"),
            Err(NavError::RouteNotFound("nonexistent".to_string()))
        );
        assert!(table.resolve("Login").is_err());
    }

    #[test]
    fn test_route_id_round_trip() {
        for def in RouteTable::builtin().routes() {
            assert_eq!(def.id.as_str().parse::<RouteId>().unwrap(), def.id);
            assert_eq!(RouteTable::builtin().get(def.id), def);
        }
    }

    #[test]
    fn test_only_detail_is_parameterized() {
        let table = RouteTable::builtin();
        assert!(table.get(RouteId::Detail).is_parameterized());
        assert!(!table.get(RouteId::Dashboard).is_parameterized());
        assert!(!table.get(RouteId::Login).is_parameterized());
    }

    #[test]
    fn test_header_flags() {
        let table = RouteTable::builtin();
        assert!(!table.get(RouteId::Login).header_shown);
        assert!(!table.get(RouteId::Dashboard).back_visible);
        assert!(table.get(RouteId::Detail).back_visible);
    }

    #[test]
    fn test_resolve_path() {
        let table = RouteTable::builtin();
        assert_eq!(table.resolve_path("/").unwrap(), (RouteId::Login, None));
        assert_eq!(table.resolve_path("login").unwrap(), (RouteId::Login, None));
        assert_eq!(
            table.resolve_path("/dashboard/").unwrap(),
            (RouteId::Dashboard, None)
        );
        assert_eq!(
            table.resolve_path("/detail/4").unwrap(),
            (RouteId::Detail, Some(RouteParams::id("4")))
        );
    }

    #[test]
    fn test_resolve_path_rejects_unknown() {
        let table = RouteTable::builtin();
        assert!(table.resolve_path("/detail").is_err());
        assert!(table.resolve_path("/detail/4/extra").is_err());
        assert!(table.resolve_path("/settings").is_err());
        assert!(table.resolve_path("/dashboard/1").is_err());
    }
}
