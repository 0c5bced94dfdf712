//! Screen implementations

pub mod dashboard;
pub mod detail;
pub mod login;
