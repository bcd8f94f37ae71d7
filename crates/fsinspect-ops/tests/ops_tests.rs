use fsinspect_ops::{
    directory_exists, ensure_directory_exists, file_exists, remove_directory_if_exists,
    remove_file_if_exists,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_predicates_on_file_directory_and_missing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("file.txt");
    let dir = temp.path().join("dir");
    let missing = temp.path().join("missing");
    fs::write(&file, "content").unwrap();
    fs::create_dir(&dir).unwrap();

    assert!(file_exists(&file));
    assert!(!directory_exists(&file));

    assert!(directory_exists(&dir));
    assert!(!file_exists(&dir));

    assert!(!file_exists(&missing));
    assert!(!directory_exists(&missing));
}

#[test]
fn test_ensure_directory_twice() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("one/two");

    ensure_directory_exists(&dir).unwrap();
    assert!(directory_exists(&dir));

    ensure_directory_exists(&dir).unwrap();
    assert!(directory_exists(&dir));
}

#[test]
fn test_ensure_accepts_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-dir");
    fs::write(&file, "x").unwrap();

    ensure_directory_exists(&file).unwrap();

    // The file is left untouched
    assert!(file_exists(&file));
    assert!(!directory_exists(&file));
    assert_eq!(fs::read_to_string(&file).unwrap(), "x");
}

#[test]
fn test_ensure_under_a_file_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("blocker");
    fs::write(&file, "x").unwrap();

    let result = ensure_directory_exists(file.join("child"));
    assert!(result.is_err());
}

#[test]
fn test_remove_file_twice() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("gone.txt");
    fs::write(&file, "bye").unwrap();

    remove_file_if_exists(&file).unwrap();
    assert!(!file_exists(&file));

    remove_file_if_exists(&file).unwrap();
    assert!(!file_exists(&file));
}

#[test]
fn test_remove_file_leaves_directories_alone() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("keep");
    fs::create_dir(&dir).unwrap();

    remove_file_if_exists(&dir).unwrap();
    assert!(directory_exists(&dir));
}

#[test]
fn test_remove_directory_leaves_files_alone() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("keep.txt");
    fs::write(&file, "x").unwrap();

    remove_directory_if_exists(&file).unwrap();
    assert!(file_exists(&file));
}

#[test]
fn test_remove_populated_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tree");
    fs::create_dir_all(root.join("a/b/c")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("top.txt"), "1").unwrap();
    fs::write(root.join(".hidden"), "2").unwrap();
    fs::write(root.join("a/mid.txt"), "3").unwrap();
    fs::write(root.join("a/b/c/deep.txt"), "4").unwrap();

    remove_directory_if_exists(&root).unwrap();

    assert!(!directory_exists(&root));
    assert!(!root.exists());
    // Nothing left behind in the parent either
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_remove_directory_twice() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("twice");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("f"), "x").unwrap();

    remove_directory_if_exists(&root).unwrap();
    remove_directory_if_exists(&root).unwrap();
    assert!(!directory_exists(&root));
}

#[cfg(unix)]
#[test]
fn test_remove_directory_does_not_follow_symlinks() {
    let temp = TempDir::new().unwrap();
    let outside = temp.path().join("outside");
    fs::create_dir(&outside).unwrap();
    fs::write(outside.join("precious.txt"), "keep me").unwrap();

    let root = temp.path().join("root");
    fs::create_dir(&root).unwrap();
    std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();
    std::os::unix::fs::symlink(outside.join("precious.txt"), root.join("file-link")).unwrap();

    remove_directory_if_exists(&root).unwrap();

    assert!(!root.exists());
    assert!(file_exists(outside.join("precious.txt")));
}

#[cfg(unix)]
#[test]
fn test_remove_directory_through_symlink() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("inner.txt"), "x").unwrap();
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    remove_directory_if_exists(&link).unwrap();

    // The link is gone, the target is emptied but kept
    assert!(fs::symlink_metadata(&link).is_err());
    assert!(directory_exists(&target));
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_partial_removal_surfaces_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    let locked = root.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("stuck.txt"), "x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

    // Privileged users can delete regardless
    let probe = locked.join("probe");
    if fs::write(&probe, "").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = remove_directory_if_exists(&root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(err.path().starts_with(&locked));
    assert!(directory_exists(&root));
}
