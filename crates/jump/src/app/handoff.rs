//! Hand-off file shared with the shell integration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Writes the chosen path for the shell wrapper to `cd` into.
///
/// The contract is a single line with no trailing newline at a fixed per-user
/// location; the wrapper reads it right after this process exits. A stale file
/// from an earlier jump is fine and never cleaned up here.
#[derive(Debug, Clone)]
pub struct Handoff {
    path: PathBuf,
}

impl Handoff {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the hand-off file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `target` as the jump destination, creating parent directories
    /// as needed. A failure here means the navigation did nothing, so it is
    /// surfaced rather than swallowed.
    pub fn write(&self, target: &str) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create hand-off directory {}", dir.display())
            })?;
        }
        fs::write(&self.path, target)
            .with_context(|| format!("failed to write hand-off file {}", self.path.display()))?;
        debug!(target, path = %self.path.display(), "recorded jump target");
        Ok(())
    }
}
