//! Lexical path normalization.
//!
//! Archive entry names and URL remainders are untrusted strings,
//! so we never hand them to the filesystem to resolve.
//! Instead, we collapse `.` and `..` components by hand,
//! much like `os.path.normpath`.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Returns the shortest path equivalent to `path`, purely lexically.
///
/// - Repeated separators and `.` components are dropped.
/// - A `..` removes the preceding normal component.
/// - A `..` directly after the root is dropped (`/..` is `/`).
/// - Leading `..` components of a relative path are kept.
/// - An empty result is `.`.
pub fn clean<P: AsRef<Utf8Path>>(path: P) -> Utf8PathBuf {
    let mut stack: Vec<Utf8Component> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match stack.last() {
                Some(Utf8Component::Normal(_)) => {
                    stack.pop();
                }
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {}
                Some(Utf8Component::ParentDir) | Some(Utf8Component::CurDir) | None => {
                    stack.push(component)
                }
            },
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return Utf8PathBuf::from(".");
    }

    let mut cleaned = Utf8PathBuf::new();
    for component in stack {
        cleaned.push(component.as_str());
    }
    cleaned
}

/// Joins `rest` onto `base` and cleans the result.
///
/// Unlike [`Utf8Path::join()`], an absolute `rest` does _not_ replace `base`;
/// both are concatenated with a separator first.
pub fn join_clean<B, R>(base: B, rest: R) -> Utf8PathBuf
where
    B: AsRef<Utf8Path>,
    R: AsRef<str>,
{
    clean(format!("{}/{}", base.as_ref(), rest.as_ref()))
}

/// Returns true if the (already cleaned) `path` lies within `root`.
///
/// `root` itself counts as inside.
/// Whatever follows `root` in `path` must not climb back out,
/// so `../../x` is not within `..`.
pub fn is_within(root: &Utf8Path, path: &Utf8Path) -> bool {
    if root.as_str() == "." {
        return stays_relative(path);
    }
    path.strip_prefix(root).map_or(false, stays_relative)
}

/// Returns true if `path` is relative and doesn't climb out with `..`.
pub fn stays_relative(path: &Utf8Path) -> bool {
    path.components()
        .all(|c| matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir))
}
