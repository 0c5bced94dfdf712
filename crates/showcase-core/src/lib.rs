//! Showcase Core - Routing, session and catalog logic
//!
//! This crate holds everything the Showcase front end needs that does not
//! touch a terminal: the static route table, the navigation stack, the
//! credential gate and the hardcoded catalog with its detail lookup.
//!
//! The [`AppContext`] ties these together into one owned controller so the
//! front end never reaches for global state.

pub mod auth;
pub mod catalog;
pub mod context;
pub mod detail;
pub mod error;
pub mod navigator;
pub mod route;
pub mod types;
pub mod view;

pub use auth::{AuthDecision, Credential, DenyReason, SessionGate, SessionState};
pub use catalog::{Catalog, CatalogItem};
pub use context::AppContext;
pub use detail::{DetailTable, ItemDetail};
pub use error::{NavError, Result};
pub use navigator::{NavigationEntry, NavigationStack, Navigator};
pub use route::{RouteDef, RouteId, RouteParams, RouteTable};
pub use types::Accent;
pub use view::View;

/// Email accepted by the session gate
pub const ACCEPTED_EMAIL: &str = "test@example.com";

/// Password accepted by the session gate
pub const ACCEPTED_PASSWORD: &str = "password";

/// Item shown when a detail lookup misses
pub const DEFAULT_DETAIL_ID: &str = "1";
