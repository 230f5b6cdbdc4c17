//! Application layer orchestrating domain logic and infrastructure.

pub mod command;
pub mod handoff;
pub mod navigator;
pub mod search;
pub mod store;
