use std::fs;

use produce_lab::{ErrorKind, delete_dir_content};

#[test]
fn clears_files_and_nested_directories_but_keeps_root() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path().join("outputs_charts");
    fs::create_dir_all(root.join("nested/deeper")).expect("dirs");
    fs::write(root.join("a.png"), b"a").expect("file");
    fs::write(root.join("nested/b.png"), b"b").expect("file");
    fs::write(root.join("nested/deeper/c.png"), b"c").expect("file");

    delete_dir_content(&root).expect("clear");

    assert!(root.is_dir());
    assert_eq!(fs::read_dir(&root).expect("read").count(), 0);
}

#[test]
fn empty_directory_is_a_no_op() {
    let tmp = tempfile::tempdir().expect("tempdir");
    delete_dir_content(tmp.path()).expect("clear");
    delete_dir_content(tmp.path()).expect("clear again");
    assert!(tmp.path().is_dir());
}

#[test]
fn missing_directory_is_a_filesystem_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let err = delete_dir_content(tmp.path().join("absent")).expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::Filesystem);
    assert!(err.to_string().contains("absent"));
}

#[test]
fn regular_file_target_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let file = tmp.path().join("report.png");
    fs::write(&file, b"png").expect("file");

    let err = delete_dir_content(&file).expect_err("not a directory");
    assert_eq!(err.kind(), ErrorKind::Filesystem);
    assert!(file.is_file());
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_unlinked_not_followed() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let outside = tmp.path().join("keep");
    fs::create_dir_all(&outside).expect("outside dir");
    fs::write(outside.join("kept.csv"), b"ds,y").expect("outside file");

    let root = tmp.path().join("outputs");
    fs::create_dir_all(&root).expect("root");
    std::os::unix::fs::symlink(&outside, root.join("link")).expect("symlink");
    std::os::unix::fs::symlink(outside.join("kept.csv"), root.join("file_link"))
        .expect("file symlink");

    delete_dir_content(&root).expect("clear");

    assert_eq!(fs::read_dir(&root).expect("read").count(), 0);
    assert!(outside.join("kept.csv").is_file());
}
