//! Bookmark list persistence.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::model::PathList;

/// Persists the bookmark list to a per-user plain-text file, one path per
/// line. The file is the only durable state this program owns; edits happen
/// either through [`PathStore::append`] or by the user opening the file in an
/// editor.
#[derive(Debug, Clone)]
pub struct PathStore {
    path: PathBuf,
    fallback_entry: String,
}

impl PathStore {
    /// Create a store over `path`. `fallback_entry` seeds the list when the
    /// file does not exist yet, conventionally the user's home directory.
    pub fn new(path: impl Into<PathBuf>, fallback_entry: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fallback_entry: fallback_entry.into(),
        }
    }

    /// Location of the bookmark file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the bookmark list, preserving file order.
    ///
    /// Each line is kept verbatim apart from trailing whitespace. A missing
    /// file is the expected cold start and yields a single-entry list holding
    /// the fallback path rather than an error.
    pub fn load(&self) -> Result<PathList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no bookmark file, using fallback entry");
            return Ok(PathList::new(vec![self.fallback_entry.clone()]));
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read bookmark file {}", self.path.display()))?;
        let paths = data
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        let list = PathList::new(paths);
        debug!(count = list.len(), "loaded bookmark list");
        Ok(list)
    }

    /// Rewrite the whole bookmark file from `list`, newline-terminated.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so a crash mid-write cannot leave a truncated list.
    pub fn save(&self, list: &PathList) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create bookmark directory {}", dir.display()))?;

        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to stage bookmark file in {}", dir.display()))?;
        for path in list.iter() {
            writeln!(staged, "{path}").context("failed to write bookmark list")?;
        }
        staged
            .persist(&self.path)
            .map_err(|err| err.error)
            .with_context(|| {
                format!("failed to replace bookmark file {}", self.path.display())
            })?;
        Ok(())
    }

    /// Append `path` verbatim as the new last entry and persist the result.
    ///
    /// On a cold start this composes with [`PathStore::load`]'s fallback: the
    /// written file starts with the fallback entry followed by `path`.
    pub fn append(&self, path: impl Into<String>) -> Result<PathList> {
        let mut list = self.load()?;
        list.push(path);
        self.save(&list)?;
        debug!(count = list.len(), path = %self.path.display(), "appended bookmark");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> PathStore {
        PathStore::new(dir.join("bookmarks"), "/home/fallback")
    }

    #[test]
    fn missing_file_yields_single_fallback_entry() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());

        let list = store.load().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some("/home/fallback"));
        // Loading must not create the file.
        assert!(!store.path().exists());
    }

    #[test]
    fn load_strips_trailing_whitespace_only() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), "/home/a  \n  /indented/b\t\n").unwrap();

        let list = store.load().unwrap();
        assert_eq!(list.get(0), Some("/home/a"));
        assert_eq!(list.get(1), Some("  /indented/b"));
    }

    #[test]
    fn save_writes_one_newline_terminated_line_per_path() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());

        let list = PathList::new(vec!["/home/a".into(), "/srv/b".into()]);
        store.save(&list).unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "/home/a\n/srv/b\n"
        );
    }

    #[test]
    fn save_after_load_is_a_fixed_point() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());
        let original = "/home/a\n/srv/b\n/home/a\n";
        fs::write(store.path(), original).unwrap();

        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), original);
    }

    #[test]
    fn append_preserves_order_and_duplicates() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), "/home/a\n/srv/b\n").unwrap();

        let updated = store.append("/srv/b").unwrap();
        assert_eq!(updated.len(), 3);

        let reloaded = store.load().unwrap();
        assert_eq!(
            reloaded.iter().collect::<Vec<_>>(),
            vec!["/home/a", "/srv/b", "/srv/b"]
        );
    }

    #[test]
    fn append_on_cold_start_keeps_the_fallback_first() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());

        store.append("/tmp/work").unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "/home/fallback\n/tmp/work\n"
        );
    }

    #[test]
    fn append_stores_the_literal_string() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_in(temp.path());
        fs::write(store.path(), "/home/a\n").unwrap();

        let updated = store.append("../relative/./path").unwrap();
        assert_eq!(updated.get(1), Some("../relative/./path"));
    }
}
