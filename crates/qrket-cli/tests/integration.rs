//! CLI integration tests against an isolated data directory.
//!
//! Every test runs the compiled binary with its own `--data-dir`, so
//! tests never touch the user's real collection and can run in parallel.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the CLI binary with arguments against the given data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qrket"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let output = run_cli(data_dir, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
fn run_cli_failure(data_dir: &Path, args: &[&str]) -> String {
    let output = run_cli(data_dir, args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a record and return its id (first stdout line of `add`).
fn add_record(data_dir: &Path, title: &str, url: &str, network: &str) -> String {
    let stdout = run_cli_success(data_dir, &["add", title, url, "--network", network]);
    stdout
        .lines()
        .next()
        .expect("add printed no id")
        .to_string()
}

/// Parse `list --json` output into JSON values, one per record.
fn list_json(data_dir: &Path, extra: &[&str]) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let stdout = run_cli_success(data_dir, &args);
    stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).expect("invalid JSON line"))
        .collect()
}

#[test]
fn add_then_list_shows_the_record() {
    let dir = TempDir::new().unwrap();

    add_record(
        dir.path(),
        "My Instagram",
        "https://instagram.com/me",
        "instagram",
    );

    let records = list_json(dir.path(), &[]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "My Instagram");
    assert_eq!(records[0]["network"]["color"], "#E4405F");
    assert!(records[0].get("createdAt").is_some());
}

#[test]
fn records_list_newest_first() {
    let dir = TempDir::new().unwrap();

    add_record(dir.path(), "First", "https://example.com/1", "website");
    add_record(dir.path(), "Second", "https://example.com/2", "website");

    let records = list_json(dir.path(), &[]);
    let titles: Vec<&str> = records.iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Second", "First"]);
}

#[test]
fn unknown_network_key_fails() {
    let dir = TempDir::new().unwrap();
    let stderr = run_cli_failure(
        dir.path(),
        &["add", "Title", "https://example.com/", "--network", "myspace"],
    );
    assert!(
        stderr.contains("network"),
        "Expected a network error, got: {}",
        stderr
    );
}

#[test]
fn query_filter_narrows_the_listing() {
    let dir = TempDir::new().unwrap();

    add_record(
        dir.path(),
        "My Instagram",
        "https://instagram.com/me",
        "instagram",
    );
    add_record(
        dir.path(),
        "My Facebook",
        "https://facebook.com/me",
        "facebook",
    );

    let records = list_json(dir.path(), &["--query", "insta"]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "My Instagram");

    let records = list_json(dir.path(), &["--network", "facebook"]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "My Facebook");
}

#[test]
fn delete_removes_only_the_given_record() {
    let dir = TempDir::new().unwrap();

    let first = add_record(dir.path(), "First", "https://example.com/1", "website");
    let second = add_record(dir.path(), "Second", "https://example.com/2", "website");

    run_cli_success(dir.path(), &["delete", &second]);

    let records = list_json(dir.path(), &[]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], first.as_str());
}

#[test]
fn bulk_delete_removes_all_given_records() {
    let dir = TempDir::new().unwrap();

    let first = add_record(dir.path(), "First", "https://example.com/1", "website");
    let second = add_record(dir.path(), "Second", "https://example.com/2", "website");
    add_record(dir.path(), "Third", "https://example.com/3", "website");

    run_cli_success(dir.path(), &["delete", &first, &second]);

    let records = list_json(dir.path(), &[]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Third");
}

#[test]
fn export_writes_a_png_named_after_the_title() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let id = add_record(dir.path(), "My Shop", "https://example.com/shop", "website");

    run_cli_success(
        dir.path(),
        &["export", &id, "--out", out.path().to_str().unwrap()],
    );

    let exported = out.path().join("qr-my_shop.png");
    assert!(exported.exists());
    let bytes = std::fs::read(&exported).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn export_all_honors_the_query_filter() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    add_record(
        dir.path(),
        "My Instagram",
        "https://instagram.com/me",
        "instagram",
    );
    add_record(dir.path(), "My Shop", "https://example.com/shop", "website");

    run_cli_success(
        dir.path(),
        &[
            "export",
            "--all",
            "--query",
            "insta",
            "--out",
            out.path().to_str().unwrap(),
        ],
    );

    assert!(out.path().join("qr-my_instagram.png").exists());
    assert!(!out.path().join("qr-my_shop.png").exists());
}

#[test]
fn export_without_ids_or_all_fails() {
    let dir = TempDir::new().unwrap();
    let stderr = run_cli_failure(dir.path(), &["export"]);
    assert!(
        stderr.contains("Nothing to export"),
        "Expected export usage error, got: {}",
        stderr
    );
}

#[test]
fn linkpage_shows_the_seeded_view_count() {
    let dir = TempDir::new().unwrap();

    add_record(dir.path(), "Shop", "https://example.com/shop", "website");

    let stdout = run_cli_success(dir.path(), &["linkpage", "--json"]);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["viewCount"], 1247);
    assert_eq!(page["entries"].as_array().unwrap().len(), 1);
    assert_eq!(page["entries"][0]["title"], "Shop");
}

#[test]
fn linkpage_copy_prints_the_url() {
    let dir = TempDir::new().unwrap();

    let id = add_record(dir.path(), "Shop", "https://example.com/shop", "website");

    let stdout = run_cli_success(dir.path(), &["linkpage", "--copy", &id]);
    assert_eq!(stdout.trim(), "https://example.com/shop");
}

#[test]
fn networks_lists_the_catalog() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["networks", "--json"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.len(), 8);
    assert!(
        entries
            .iter()
            .any(|e| e["key"] == "instagram" && e["color"] == "#E4405F")
    );
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["list"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No records found"));
}
