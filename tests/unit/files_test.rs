//! Unit tests for input discovery

use std::fs;
use tempfile::TempDir;

use tdt::files::collect_inputs;

use crate::helpers::fixtures_dir;

#[test]
fn fixture_directory_lists_sorted_txt_files() {
    let files = collect_inputs(&fixtures_dir()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["second_table.txt", "session.txt"]);
}

#[test]
fn nested_directories_and_mixed_case_extensions() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("2024").join("03");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp.path().join("a.TXT"), "").unwrap();
    fs::write(nested.join("b.txt"), "").unwrap();
    fs::write(nested.join("notes.md"), "").unwrap();

    let files = collect_inputs(temp.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| !f.ends_with("notes.md")));
}

#[test]
fn empty_directory_yields_no_files() {
    let temp = TempDir::new().unwrap();
    assert!(collect_inputs(temp.path()).unwrap().is_empty());
}
