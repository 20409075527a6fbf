//! Integration tests for `lexfvs inspect` and `lexfvs export`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `lexfvs` binary.
fn lexfvs_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("lexfvs");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(lexfvs_bin())
        .arg("--quiet")
        .args(args)
        .output()
        .expect("run lexfvs")
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_human_shows_counts() {
    let out = run(&["inspect", fixture("toy.json").to_str().expect("path")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("headwords:          7"), "stdout: {stdout}");
    assert!(stdout.contains("vertices:           8"), "stdout: {stdout}");
    assert!(stdout.contains("edges:              11"), "stdout: {stdout}");
    assert!(stdout.contains("cyclic_components:  3"), "stdout: {stdout}");
}

#[test]
fn inspect_json_is_an_object() {
    let out = run(&[
        "--format",
        "json",
        "inspect",
        fixture("toy.json").to_str().expect("path"),
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON stats");
    assert_eq!(value["free_words"], 1);
    assert_eq!(value["words_on_cycles"], 6);
    assert_eq!(value["largest_component"], 2);
}

#[test]
fn inspect_acyclic_dictionary_has_no_cyclic_components() {
    let out = run(&[
        "--format",
        "json",
        "inspect",
        fixture("chain.json").to_str().expect("path"),
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON stats");
    assert_eq!(value["cyclic_components"], 0);
    assert_eq!(value["largest_component"], 1);
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_emits_node_link_json() {
    let out = run(&["export", fixture("three_cycle.json").to_str().expect("path")]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("node-link JSON");
    let nodes = value["nodes"].as_array().expect("nodes array");
    let links = value["links"].as_array().expect("links array");
    assert_eq!(nodes.len(), 3);
    assert_eq!(links.len(), 3);
    assert!(nodes.iter().all(|n| n["name"].is_string()));
    assert!(links.iter().all(|l| l["source"].is_string() && l["target"].is_string()));
}

#[test]
fn export_with_removal_deletes_words() {
    let out = run(&[
        "export",
        fixture("toy.json").to_str().expect("path"),
        "--removal",
        fixture("toy_feasible.json").to_str().expect("path"),
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("node-link JSON");
    let names: Vec<&str> = value["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .filter_map(|n| n["name"].as_str())
        .collect();
    assert_eq!(names.len(), 5);
    for removed in ["living", "kept", "dog"] {
        assert!(!names.contains(&removed), "{removed} should be gone");
    }
}
