//! Domain models for the bookmark list.

use std::path::Path;

/// Ordered list of bookmarked paths.
///
/// Insertion order is the user-facing index order and duplicates are allowed:
/// a path bookmarked twice simply occupies two indices. Entries are stored as
/// the literal strings the user supplied, with no normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    paths: Vec<String>,
}

impl PathList {
    /// Wrap an ordered set of path strings.
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Number of bookmarked paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list holds no paths at all.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The path at `index`, if the index is in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    /// Index of the final row, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Append a path to the end of the list. No deduplication.
    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Iterate the stored path strings in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Iterate indexed entries, the shape the list renderer consumes.
    pub fn entries(&self) -> impl Iterator<Item = PathEntry<'_>> {
        self.paths
            .iter()
            .enumerate()
            .map(|(index, path)| PathEntry { index, path })
    }

    /// How many decimal digits the largest valid index occupies.
    ///
    /// This bounds the quick-select buffer: with ten paths the highest index
    /// is 9, so only a single digit can ever match. An empty list still
    /// reports 1 so a buffer exists to report misses against.
    pub fn max_index_digits(&self) -> usize {
        match self.last_index() {
            Some(0) | None => 1,
            Some(last) => (last.ilog10() + 1) as usize,
        }
    }

    /// Width of the basename column: longest basename plus two spaces of
    /// padding. Computed once per list; the list never changes mid-session.
    pub fn basename_column_width(&self) -> usize {
        self.paths
            .iter()
            .map(|path| basename(path).chars().count())
            .max()
            .unwrap_or(0)
            + 2
    }
}

/// A single row of the list: the derived index plus the stored path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry<'a> {
    pub index: usize,
    pub path: &'a str,
}

impl PathEntry<'_> {
    /// Final component of the path, used for the display column.
    pub fn basename(&self) -> &str {
        basename(self.path)
    }
}

/// Final path component, falling back to the literal string for paths with
/// no final component (such as `/`).
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
