//! Reusable UI components

pub mod help;
pub mod notice;
pub mod notification;
