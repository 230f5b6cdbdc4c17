//! Terminal user interface built on ratatui.

pub mod app;
pub mod components;
pub mod theme;
