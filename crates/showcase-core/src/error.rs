//! Error types for the Showcase core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NavError>;

/// Navigation failures
///
/// Credential denials are not errors; see [`crate::DenyReason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The requested route identifier is not in the route table.
    /// This is a defect in the calling view, not a user mistake.
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}
