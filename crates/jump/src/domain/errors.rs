//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JumpError {
    #[error("cannot determine the current user's home directory")]
    HomeDirUnavailable,
    #[error("unknown theme '{0}' (expected 'charcoal' or 'plain')")]
    UnknownTheme(String),
}
