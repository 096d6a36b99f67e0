//! # Path Resolver
//!
//! Normalizes user-supplied relative/absolute paths against the current
//! working location and answers existence questions against the archive
//! store.
//!
//! Engine-facing paths are absolute: `/`-prefixed, and `/`-terminated for
//! directories. Store entries use the archive's serialized form without a
//! leading `/`. All raw path-string arithmetic is confined to this module so
//! the rest of the engine never slices path strings directly.

use crate::store::ZipStore;

/// Resolves `input` against `base` and returns a directory-style absolute
/// path with a single trailing `/`.
///
/// `.` is a no-op, `..` pops one segment (a no-op at root), a leading `/`
/// makes `input` absolute, and redundant separators collapse.
pub fn normalize(base: &str, input: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let base = if input.starts_with('/') { "" } else { base };
    for segment in base.split('/').chain(input.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Resolves `input` against `base` with the same segment rules as
/// [`normalize`], but returns an entry-style path: the trailing `/` is kept
/// only when the caller's input literally ends with one (which signals
/// directory intent to `mv`).
pub fn resolve_entry(base: &str, input: &str) -> String {
    let dir = normalize(base, input);
    if dir == "/" || input.ends_with('/') {
        dir
    } else {
        dir[..dir.len() - 1].to_string()
    }
}

/// The archive's serialized form of an absolute path: no leading `/`.
pub fn store_key(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Final path segment, ignoring a trailing directory `/`.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Joins a store-relative parent directory and a child name. An empty
/// parent designates the archive root.
pub fn join(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// If `entry_path` is an immediate child of the absolute directory `dir`,
/// returns its name with any directory `/` trimmed.
pub fn immediate_child<'a>(dir: &str, entry_path: &'a str) -> Option<&'a str> {
    let rest = entry_path.strip_prefix(store_key(dir))?;
    let name = rest.trim_end_matches('/');
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// True if the absolute directory path exists in the store: the root always
/// does; otherwise an explicit marker entry must equal the path, or at
/// least one entry must live under the prefix.
pub fn exists_as_directory(store: &ZipStore, path: &str) -> bool {
    let key = store_key(path);
    if key.is_empty() {
        return true;
    }
    store
        .entries()
        .iter()
        .any(|e| e.path == key || (e.path.len() > key.len() && e.path.starts_with(key)))
}

/// True if the path names an existing directory: a marker entry for it, or
/// any entry under it. This is the `mv` destination-is-directory test for
/// targets named without a trailing `/`.
pub fn has_children(store: &ZipStore, path: &str) -> bool {
    let key = store_key(path);
    if key.is_empty() {
        return !store.entries().is_empty();
    }
    let prefix = format!("{}/", key.trim_end_matches('/'));
    store.entries().iter().any(|e| e.path.starts_with(&prefix))
}

/// True iff an entry with exactly this path (no trailing `/`) exists.
pub fn exists_as_file(store: &ZipStore, path: &str) -> bool {
    let key = store_key(path);
    !key.ends_with('/') && store.entries().iter().any(|e| e.path == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::write_scratch;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_dot_is_identity() {
        assert_eq!(normalize("/", "."), "/");
        assert_eq!(normalize("/del1/", "."), "/del1/");
    }

    #[test]
    fn test_normalize_dotdot_pops_and_is_noop_at_root() {
        assert_eq!(normalize("/del1/sub/", ".."), "/del1/");
        assert_eq!(normalize("/del1/", ".."), "/");
        assert_eq!(normalize("/", ".."), "/");
        // Popping past root stays at root.
        assert_eq!(normalize("/", "../../.."), "/");
    }

    #[test]
    fn test_normalize_relative_and_absolute() {
        assert_eq!(normalize("/del1/", "sub"), "/del1/sub/");
        assert_eq!(normalize("/del1/", "/other"), "/other/");
        assert_eq!(normalize("/a/b/", "../c"), "/a/c/");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("/", "a//b///c"), "/a/b/c/");
        assert_eq!(normalize("/", "./a/./b"), "/a/b/");
    }

    #[test]
    fn test_resolve_entry_keeps_callers_trailing_slash() {
        assert_eq!(resolve_entry("/", "file.txt"), "/file.txt");
        assert_eq!(resolve_entry("/", "del1/"), "/del1/");
        assert_eq!(resolve_entry("/del1/", "../file.txt"), "/file.txt");
        assert_eq!(resolve_entry("/", "/"), "/");
    }

    #[test]
    fn test_basename_and_join() {
        assert_eq!(basename("/del1/super.txt"), "super.txt");
        assert_eq!(basename("/del1/"), "del1");
        assert_eq!(basename("file.txt"), "file.txt");
        assert_eq!(join("del1", "file.txt"), "del1/file.txt");
        assert_eq!(join("del1/", "file.txt"), "del1/file.txt");
        assert_eq!(join("", "file.txt"), "file.txt");
    }

    #[test]
    fn test_immediate_child() {
        assert_eq!(immediate_child("/", "file.txt"), Some("file.txt"));
        assert_eq!(immediate_child("/", "del1/"), Some("del1"));
        assert_eq!(immediate_child("/", "del1/super.txt"), None);
        assert_eq!(immediate_child("/del1/", "del1/super.txt"), Some("super.txt"));
        assert_eq!(immediate_child("/del1/", "file.txt"), None);
        assert_eq!(immediate_child("/del1/", "del1/"), None);
    }

    #[test]
    fn test_exists_checks() {
        let dir = tempdir().unwrap();
        let path = write_scratch(
            dir.path(),
            &["file.txt", "del1/", "del1/super.txt", "del2/nested.txt"],
        );
        let store = ZipStore::load(&path).unwrap();

        assert!(exists_as_directory(&store, "/"));
        assert!(exists_as_directory(&store, "/del1/"));
        // No explicit marker, but an entry lives under the prefix.
        assert!(exists_as_directory(&store, "/del2/"));
        assert!(!exists_as_directory(&store, "/nope/"));
        // A file path is not a directory.
        assert!(!exists_as_directory(&store, "/file.txt/"));

        assert!(exists_as_file(&store, "/file.txt"));
        assert!(exists_as_file(&store, "/del1/super.txt"));
        assert!(!exists_as_file(&store, "/del1"));
        assert!(!exists_as_file(&store, "/missing.txt"));
    }

    #[test]
    fn test_has_children() {
        let dir = tempdir().unwrap();
        let path = write_scratch(dir.path(), &["file.txt", "del1/", "del1/super.txt", "empty/"]);
        let store = ZipStore::load(&path).unwrap();

        assert!(has_children(&store, "/del1"));
        assert!(has_children(&store, "/del1/"));
        // The marker entry itself satisfies the prefix, so even an empty
        // directory is a valid move target.
        assert!(has_children(&store, "/empty"));
        assert!(!has_children(&store, "/file.txt"));
        assert!(has_children(&store, "/"));
    }
}
