//! Integration tests for the kireji CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BASHO: &str = "an old silent pond, a little frog jumps into, the sound of water.";

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn kireji() -> Command {
    Command::cargo_bin("kireji").unwrap()
}

#[test]
fn test_check_accepts_haiku() {
    kireji()
        .args(["check", "-t", BASHO])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED text #1"))
        .stdout(predicate::str::contains("1 of 1 accepted"));
}

#[test]
fn test_check_rejects_with_user_message() {
    kireji()
        .args(["check", "-t", "hello, world, foo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "reason: line 1 has 2 syllables, needs 5 (exact)",
        ))
        .stderr(predicate::str::contains("Non-haiku detected!"))
        .stderr(predicate::str::contains("1 of 1 submissions are not haiku"));
}

#[test]
fn test_check_malformed_structure() {
    kireji()
        .args(["check", "-t", "hello world, foo"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("expected 2 commas, found 1"));
}

#[test]
fn test_check_file_input() {
    kireji()
        .args(["check", "-i", &fixture_path("haiku.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("haiku.txt:1"))
        .stdout(predicate::str::contains("haiku.txt:2"))
        .stdout(predicate::str::contains("2 of 2 accepted"));
}

#[test]
fn test_check_mixed_file_reports_each_line() {
    kireji()
        .args(["check", "-q", "-i", &fixture_path("mixed.txt")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ACCEPTED"))
        .stdout(predicate::str::contains("mixed.txt:3"))
        .stdout(predicate::str::contains("mixed.txt:4"))
        .stdout(predicate::str::contains("1 of 3 accepted"))
        .stderr(predicate::str::contains("2 of 3 submissions are not haiku"));
}

#[test]
fn test_check_parallel_matches_sequential() {
    let run = |parallel: bool| {
        let mut cmd = kireji();
        cmd.args(["check", "-q", "-f", "json", "-i", &fixture_path("mixed.txt")]);
        if parallel {
            cmd.arg("--parallel");
        }
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(false), run(true));
}

#[test]
fn test_json_output() {
    let output = kireji()
        .args(["check", "-f", "json", "-t", BASHO, "-t", "old pond, frog, water"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["accepted"], true);
    assert_eq!(items[1]["accepted"], false);
    assert_eq!(items[1]["detail"]["reason"]["kind"], "syllable_mismatch");
    assert_eq!(items[1]["detail"]["reason"]["line"], 1);
}

#[test]
fn test_markdown_output() {
    kireji()
        .args(["check", "-f", "markdown", "-t", BASHO])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] `text #1`"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Accepted: 1 of 1*"));
}

#[test]
fn test_tokenizer_flag_changes_verdict() {
    let text = "an old silent pond, a little frog jumps into, the sound of water!.";

    kireji()
        .args(["check", "-k", "linguistic", "-t", text])
        .assert()
        .success();

    kireji()
        .args(["check", "-k", "whitespace", "-t", text])
        .assert()
        .failure()
        .stdout(predicate::str::contains("line 3 has 3 syllables"));
}

#[test]
fn test_config_file_sets_tokenizer_and_format() {
    let text = "an old silent pond, a little frog jumps into, the sound of water!.";

    kireji()
        .args(["check", "-c", &fixture_path("whitespace.toml"), "-t", text])
        .assert()
        .failure()
        .stdout(predicate::str::contains("- [ ] `text #1`"))
        .stdout(predicate::str::contains("*Accepted: 0 of 1*"));

    // Flags win over the file
    kireji()
        .args([
            "check",
            "-c",
            &fixture_path("whitespace.toml"),
            "-k",
            "linguistic",
            "-f",
            "text",
            "-t",
            text,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED"));
}

#[test]
fn test_custom_dictionary() {
    let text = "zen garden stone stone, rake rake rake rake rake rake rake, stone zen garden rake";

    kireji()
        .args(["check", "-d", &fixture_path("tiny.dict"), "-t", text])
        .assert()
        .success();

    kireji()
        .args(["check", "-d", &fixture_path("tiny.dict"), "-t", BASHO])
        .assert()
        .failure();
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("verdicts.json");

    kireji()
        .args(["check", "-f", "json", "-t", BASHO, "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"accepted\": true"));
}

#[test]
fn test_syllables_command() {
    kireji()
        .args(["syllables", "every little frog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("every"))
        .stdout(predicate::str::contains("2-3"))
        .stdout(predicate::str::contains("Total: 5-6"));
}

#[test]
fn test_list_tokenizers() {
    kireji()
        .args(["list", "tokenizers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whitespace"))
        .stdout(predicate::str::contains("linguistic"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_list_formats() {
    kireji()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_validate_dictionary() {
    kireji()
        .args(["validate-dictionary", "-d", &fixture_path("tiny.dict")])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Dictionary is valid!"))
        .stdout(predicate::str::contains("Words: 4"));

    kireji()
        .args(["validate-dictionary", "-d", &fixture_path("bad.dict")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Dictionary is invalid!"))
        .stderr(predicate::str::contains("dictionary line 2"));
}

#[test]
fn test_generate_config_round_trips_through_check() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("kireji.toml");

    kireji()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    kireji()
        .args(["check", "-c"])
        .arg(&config)
        .args(["-t", BASHO])
        .assert()
        .success();
}

#[test]
fn test_missing_input_file() {
    kireji()
        .args(["check", "-i", "nonexistent_file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_missing_dictionary_file() {
    kireji()
        .args(["check", "-d", "nonexistent.dict", "-t", BASHO])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_help() {
    kireji()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("syllables"));
}

#[test]
fn test_summary_flag_omits_line_details() {
    kireji()
        .args(["check", "--summary", "-t", BASHO])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACCEPTED text #1"))
        .stdout(predicate::str::contains("line 1:").not());

    kireji()
        .args(["check", "-t", BASHO])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 1: 5 syllables"));
}
