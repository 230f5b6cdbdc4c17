//! External editor integration for editing the raw bookmark file.

use std::env;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

const EDITOR_ENV: &str = "EDITOR";

/// Open `path` in the user's editor and wait for it to exit.
///
/// `$EDITOR` picks the program, `fallback` covers an unset or blank value.
/// The value is used as a single program name, matching the historical
/// behavior of quoting the expansion. The editor's exit status is noted but
/// deliberately not acted on: whatever the user saved (or didn't) is the new
/// state of the file.
pub fn open(path: &Path, fallback: &str) -> Result<()> {
    let editor = env::var(EDITOR_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());

    debug!(%editor, path = %path.display(), "launching editor");
    let status = Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{editor}'"))?;
    debug!(code = status.code(), "editor exited");
    Ok(())
}
