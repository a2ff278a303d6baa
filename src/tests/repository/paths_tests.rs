use super::*;

#[test]
fn parent_segments_fold_into_sibling() {
    let p = normalize_path(Path::new("/repo/Sales.Report/../Sales.SemanticModel"));
    assert_eq!(p, PathBuf::from("/repo/Sales.SemanticModel"));
}

#[test]
fn current_dir_segments_are_dropped() {
    let p = normalize_path(Path::new("/repo/./a/./b"));
    assert_eq!(p, PathBuf::from("/repo/a/b"));
}

#[test]
fn parent_of_root_stays_at_root() {
    assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
}

#[test]
fn leading_parent_on_relative_path_is_kept() {
    assert_eq!(normalize_path(Path::new("../a/../b")), PathBuf::from("../b"));
}
