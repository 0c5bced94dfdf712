//! Application context
//!
//! Owns the navigation stack, the session and the data tables. Front ends
//! hold one `AppContext` and drive it with user actions; nothing here is
//! global.

use tracing::{info, warn};

use crate::auth::{AuthDecision, Credential, SessionGate, SessionState};
use crate::catalog::Catalog;
use crate::detail::DetailTable;
use crate::error::Result;
use crate::navigator::Navigator;
use crate::route::{RouteId, RouteParams, RouteTable};
use crate::view::{self, View};

/// Controller state for one running app
#[derive(Debug, Clone)]
pub struct AppContext {
    navigator: Navigator,
    session: SessionState,
    gate: SessionGate,
    catalog: Catalog,
    details: DetailTable,
    /// Deep link waiting for a successful login
    pending_link: Option<(RouteId, Option<RouteParams>)>,
}

impl AppContext {
    /// Context over the built-in data, showing the login screen
    pub fn new() -> Self {
        Self::with_gate(SessionGate::default())
    }

    /// Context with a custom credential gate
    pub fn with_gate(gate: SessionGate) -> Self {
        let catalog = Catalog::builtin();
        let details = DetailTable::builtin();

        let missing = details.missing_for(&catalog);
        if !missing.is_empty() {
            warn!(?missing, "Catalog entries without detail content");
        }

        Self {
            navigator: Navigator::new(RouteTable::builtin()),
            session: SessionState::Unauthenticated,
            gate,
            catalog,
            details,
            pending_link: None,
        }
    }

    /// Check credentials and, on success, replace the login screen with the
    /// dashboard
    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthDecision> {
        let credential = Credential::new(email, password);
        let decision = self.gate.authenticate(&credential);

        match decision {
            AuthDecision::Admit => {
                self.session = SessionState::Authenticated;
                self.navigator.replace(RouteId::Dashboard.as_str(), None)?;
                info!("Login accepted");

                if let Some((route, params)) = self.pending_link.take() {
                    self.follow(route, params)?;
                }
            }
            AuthDecision::Deny(reason) => {
                info!(%reason, "Login denied");
            }
        }

        Ok(decision)
    }

    /// End the session and replace the current screen with login
    pub fn logout(&mut self) -> Result<()> {
        self.session = SessionState::Unauthenticated;
        self.navigator.replace(RouteId::Login.as_str(), None)?;
        info!("Logged out");
        Ok(())
    }

    /// Show the detail screen for a catalog entry
    pub fn open_item(&mut self, id: &str) -> Result<()> {
        self.navigator
            .push(RouteId::Detail.as_str(), Some(RouteParams::id(id)))
    }

    /// Go back one screen; false at the root
    pub fn back(&mut self) -> bool {
        self.navigator.back()
    }

    /// Follow a deep-link path
    ///
    /// Before login the link is held and applied once the user is admitted.
    pub fn open_deep_link(&mut self, path: &str) -> Result<()> {
        let (route, params) = self.navigator.table().resolve_path(path)?;

        if self.session.is_authenticated() {
            self.follow(route, params)
        } else if route == RouteId::Login {
            Ok(())
        } else {
            info!(path, "Holding deep link until login");
            self.pending_link = Some((route, params));
            Ok(())
        }
    }

    /// The deep link waiting for login, if any
    pub fn pending_link(&self) -> Option<&(RouteId, Option<RouteParams>)> {
        self.pending_link.as_ref()
    }

    /// Data for the visible screen
    pub fn current_view(&self) -> View<'_> {
        view::select(self.navigator.current(), &self.catalog, &self.details)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn details(&self) -> &DetailTable {
        &self.details
    }

    fn follow(&mut self, route: RouteId, params: Option<RouteParams>) -> Result<()> {
        match route {
            // Login is reached through logout only.
            RouteId::Login => Ok(()),
            RouteId::Dashboard if self.navigator.current().route == RouteId::Dashboard => Ok(()),
            _ => self.navigator.push(route.as_str(), params),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
