//! Infrastructure adapters for config and external integrations.

pub mod config;
pub mod editor;
