use std::path::{Component, Path, PathBuf};

/// Lexically normalizes `path`: drops `.` and folds `..` into its parent.
///
/// Does not touch the filesystem, so it works for paths that do not exist.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/repository/paths_tests.rs"]
mod tests;
