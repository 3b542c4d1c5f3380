//! Integration tests for the CLI
//!
//! Tests the command-line interface for apply, status, and rules commands

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const CHARSET_ANCHOR: &str =
    r#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />"#;
const OLD_JQUERY: &str = "http://www.asiapacific.my/mobilehosting/durafloor/jquery.js";

/// Helper to create a directory with one legacy page fixture
fn setup_pages() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("profile.html");
    fs::write(
        &page,
        format!(
            "<html>\n<head>\n{CHARSET_ANCHOR}\n<script src=\"{OLD_JQUERY}\"></script>\n</head>\n<body></body>\n</html>\n"
        ),
    )
    .unwrap();
    (dir, page)
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_apply_help() {
    let output = run_cli(&["apply", "--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Apply the retrofit rules"));
}

#[test]
fn test_apply_basic() {
    let (_dir, page) = setup_pages();

    let output = run_cli(&["apply", page.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Updated"));
    assert!(stdout.contains("Summary:"));

    let content = fs::read_to_string(&page).unwrap();
    assert!(content.contains("viewport"));
    assert!(!content.contains(OLD_JQUERY));
}

#[test]
fn test_apply_idempotent() {
    let (_dir, page) = setup_pages();

    let first = run_cli(&["apply", page.to_str().unwrap()]);
    assert!(first.status.success());
    let after_first = fs::read_to_string(&page).unwrap();

    let second = run_cli(&["apply", page.to_str().unwrap()]);
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("No changes needed"));
    assert_eq!(fs::read_to_string(&page).unwrap(), after_first);
}

#[test]
fn test_apply_dry_run_leaves_files_alone() {
    let (_dir, page) = setup_pages();
    let before = fs::read_to_string(&page).unwrap();

    let output = run_cli(&["apply", "--dry-run", page.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DRY RUN"));
    assert!(stdout.contains("Would update"));
    assert_eq!(fs::read_to_string(&page).unwrap(), before);
}

#[test]
fn test_apply_missing_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let ghost = dir.path().join("ghost.html");

    let output = run_cli(&["apply", ghost.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File not found"));
    assert!(stdout.contains("1 missing"));
}

#[test]
fn test_status_reports_without_writing() {
    let (_dir, page) = setup_pages();
    let before = fs::read_to_string(&page).unwrap();

    let output = run_cli(&["status", page.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retrofit Status Report"));
    assert!(stdout.contains("Would update"));
    assert_eq!(fs::read_to_string(&page).unwrap(), before);
}

#[test]
fn test_rules_lists_builtin_set() {
    let output = run_cli(&["rules"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("viewport-meta"));
    assert!(stdout.contains("jquery-cdn-https"));
    assert!(stdout.contains("4 rules"));
}
