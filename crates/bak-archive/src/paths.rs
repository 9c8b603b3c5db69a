//! Path validation and item resolution.
//!
//! All predicates answer `false` when the filesystem cannot answer, they
//! never return an error.

use std::path::{Component, Path, PathBuf};

/// Returns true if `path` exists and is a directory.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Returns true if `path` exists and is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Returns true if `path` is a directory or a regular file.
pub fn is_valid_item(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    is_directory(path) || is_file(path)
}

/// Joins `item` onto `root`, returning the joined path only when it names
/// an existing file or directory.
///
/// An absolute `item` replaces `root` entirely.
pub fn join_item(root: &Path, item: &str) -> Option<PathBuf> {
    let full = root.join(item);
    is_valid_item(&full).then_some(full)
}

/// Filters `candidates` down to the items that exist either as given or
/// relative to `root`.
///
/// Kept entries are the original candidate strings, in input order,
/// duplicates included.
pub fn resolve_items<I, S>(root: &Path, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut items = Vec::new();

    for candidate in candidates {
        let candidate = candidate.into();
        if is_valid_item(&candidate) || is_valid_item(root.join(&candidate)) {
            items.push(candidate);
        } else {
            tracing::debug!("Dropping invalid item: {:?}", candidate);
        }
    }

    items
}

/// Name an item is stored under inside the tar archive.
///
/// Tar member names must be relative, so root, prefix, `.` and `..`
/// components are removed. May return an empty path (for example for
/// `"/"` or `"."`).
pub fn member_name(item: &str) -> PathBuf {
    Path::new(item)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}
