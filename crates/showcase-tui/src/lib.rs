//! Showcase TUI - terminal front end for the Showcase app shell
//!
//! Sign-in, a catalog dashboard and per-item detail screens, driven by the
//! navigation and session logic in `showcase-core`.

pub mod app;
pub mod ui;

pub use app::App;
