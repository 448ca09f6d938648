//! File, directory and stream helpers working together

use chet::ext::fs;
use chet::ext::stream::{open_file_stream, text_to_stream};
use chet::ext::{ByteStreamExt, StrExt};
use tempfile::TempDir;

#[test]
fn test_write_copy_and_hash() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("notes.txt");
    let copy = temp_dir.path().join("backup").join("notes.txt");

    fs::write_all_lines(&source, ["alpha", "beta"]).unwrap();
    fs::append_text(&source, "gamma\n").unwrap();
    assert_eq!(fs::read_all_lines(&source), vec!["alpha", "beta", "gamma"]);

    fs::create_safe(temp_dir.path().join("backup")).unwrap();
    assert!(fs::copy_file(&source, &copy, false).unwrap());
    assert!(fs::copy_file(&source, &copy, false).is_err());
    assert_eq!(fs::file_md5(&source), fs::file_md5(&copy));
    assert_eq!(fs::file_md5(&source), fs::read_all_text(&copy).to_md5());
}

#[test]
fn test_listing_and_cleanup() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_safe(root.join("a/b")).unwrap();
    fs::write_all_text(root.join("one.log"), "1").unwrap();
    fs::write_all_text(root.join("a/two.log"), "2").unwrap();
    fs::write_all_text(root.join("a/b/three.txt"), "3").unwrap();

    assert_eq!(fs::files_safe(root, "*.log", false).len(), 1);
    assert_eq!(fs::files_safe(root, "*.log", true).len(), 2);
    assert_eq!(fs::directories_safe(root, "*", true).len(), 2);

    fs::delete_safe(root.join("a"), true).unwrap();
    assert!(!root.join("a").exists());
    assert!(fs::files_safe(root.join("missing"), "*", true).is_empty());
}

#[test]
fn test_stream_to_file_and_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stream.bin");

    let mut stream = text_to_stream("hello stream");
    assert_eq!(stream.save_to_file(&path).unwrap(), 12);

    let mut reopened = open_file_stream(&path);
    assert_eq!(reopened.to_text(), "hello stream");
    assert_eq!(reopened.read_text(6, 6), "stream");

    let mut missing = open_file_stream(temp_dir.path().join("none.bin"));
    assert!(missing.is_empty_stream());
}
