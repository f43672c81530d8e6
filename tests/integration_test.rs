/// Integration tests for the census
///
/// These tests build small synthetic directory trees on disk and verify
/// scanning, aggregation, and report formatting end to end.

use std::fs;

use java_census::{build_tree, format_report, scan_directory, CensusError};

#[test]
fn test_census_of_nested_tree() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");

    let a_body = "public class A { private int x; try { } catch (Exception e) {} }";
    fs::write(root.path().join("A.java"), a_body).expect("Failed to write A.java");

    let sub = root.path().join("sub");
    fs::create_dir(&sub).expect("Failed to create sub dir");
    let b_body = "public class B {}";
    fs::write(sub.join("B.java"), b_body).expect("Failed to write B.java");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");

    // Root aggregates over itself and the subdirectory.
    assert_eq!(tree.aggregate_count("public").unwrap(), 2);
    assert_eq!(tree.aggregate_count("private").unwrap(), 1);
    assert_eq!(tree.aggregate_count("try").unwrap(), 1);
    assert_eq!(tree.aggregate_count("catch").unwrap(), 1);
    assert_eq!(tree.total_size(), (a_body.len() + b_body.len()) as u64);

    // The subdirectory only sees its own file.
    assert_eq!(tree.children().len(), 1);
    let sub_node = &tree.children()[0];
    assert_eq!(sub_node.aggregate_count("public").unwrap(), 1);
    assert_eq!(sub_node.aggregate_count("private").unwrap(), 0);
    assert_eq!(sub_node.aggregate_count("try").unwrap(), 0);
    assert_eq!(sub_node.aggregate_count("catch").unwrap(), 0);
    assert_eq!(sub_node.total_size(), b_body.len() as u64);

    // Two report lines, the subdirectory dash-indented one level deeper.
    let report = format_report(&tree).expect("Failed to format report");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&*root.path().to_string_lossy()));
    assert!(lines[1].starts_with("-/sub"));
}

#[test]
fn test_report_line_layout() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let body = "public class Only { private int x; }";
    fs::write(root.path().join("Only.java"), body).expect("Failed to write Only.java");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");
    let report = format_report(&tree).expect("Failed to format report");

    let expected = format!(
        "{:<33}\t\t{:>6} bytes\t{:>6} public\t{:>6} private\t{:>6} try\t{:>6} catch\n",
        root.path().to_string_lossy(),
        body.len(),
        1,
        1,
        0,
        0
    );
    assert_eq!(report, expected);
}

#[test]
fn test_deep_paths_truncate_from_the_left() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let sub = root.path().join("a_really_long_subdirectory_name_indeed");
    fs::create_dir(&sub).expect("Failed to create sub dir");
    fs::write(sub.join("Deep.java"), "public").expect("Failed to write Deep.java");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");
    let report = format_report(&tree).expect("Failed to format report");
    let lines: Vec<&str> = report.lines().collect();

    // "-/a_really_long_subdirectory_name_indeed" is 40 characters, so the
    // display keeps the last 30 behind an ellipsis.
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("..._long_subdirectory_name_indeed"));
}

#[test]
fn test_non_java_files_are_excluded() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(root.path().join("Only.java"), "public").expect("Failed to write Only.java");
    fs::write(root.path().join("notes.txt"), "public public public")
        .expect("Failed to write notes.txt");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");

    assert_eq!(tree.all_files().len(), 1);
    assert_eq!(tree.aggregate_count("public").unwrap(), 1);
    assert_eq!(tree.total_size(), "public".len() as u64);
}

#[test]
fn test_empty_tree_reports_zeros() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");
    assert_eq!(tree.total_size(), 0);
    assert_eq!(tree.aggregate_count("public").unwrap(), 0);

    let report = format_report(&tree).expect("Failed to format report");
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn test_scanning_a_non_directory_fails_with_invalid_input() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = root.path().join("A.java");
    fs::write(&file_path, "public").expect("Failed to write A.java");

    match build_tree(&file_path) {
        Err(CensusError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_unregistered_keyword_fails_instead_of_returning_zero() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(root.path().join("A.java"), "public").expect("Failed to write A.java");

    let tree = scan_directory(root.path()).expect("Failed to scan tree");
    match tree.aggregate_count("synchronized") {
        Err(CensusError::UnknownKeyword(word)) => assert_eq!(word, "synchronized"),
        other => panic!("expected UnknownKeyword, got {:?}", other),
    }
}

#[test]
fn test_on_demand_keyword_counts_across_the_tree() {
    let root = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(root.path().join("A.java"), "class A {} // class\n")
        .expect("Failed to write A.java");

    let sub = root.path().join("sub");
    fs::create_dir(&sub).expect("Failed to create sub dir");
    fs::write(sub.join("B.java"), "class B {} class C {}").expect("Failed to write B.java");

    let mut tree = scan_directory(root.path()).expect("Failed to scan tree");

    // The line comment hides one occurrence in A.java.
    assert_eq!(tree.count_keyword("class").unwrap(), 3);
    assert_eq!(tree.aggregate_count("class").unwrap(), 3);
    assert_eq!(tree.children()[0].aggregate_count("class").unwrap(), 2);
}
