//! Integration tests for the tiercart binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tiercart() -> Command {
    let mut cmd = Command::cargo_bin("tiercart").unwrap();
    cmd.env_remove("TIERCART_CONFIG")
        .env_remove("TIERCART_FORMAT")
        .env_remove("TIERCART_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_text_report_from_stdin() {
    tiercart()
        .write_stdin("2\n1 30\n2 5\n")
        .assert()
        .success()
        .stdout("Total Amount: 32\nCheap Category Discount: 3\nOrder-1 (1 items)\nOrder-2 (1 items)\n");
}

#[test]
fn test_repeated_orders_merge() {
    tiercart()
        .write_stdin("3\n1 15\n1 15\n2 10\n")
        .assert()
        .success()
        .stdout("Total Amount: 37\nCheap Category Discount: 3\nOrder-1 (2 items)\nOrder-2 (1 items)\n");
}

#[test]
fn test_no_category_line_when_nothing_discounted() {
    tiercart()
        .write_stdin("2\n4 10\n4 10\n")
        .assert()
        .success()
        .stdout("Total Amount: 20\nOrder-4 (2 items)\n");
}

#[test]
fn test_json_report() {
    let output = tiercart()
        .args(["--format", "json"])
        .write_stdin("1\n1 15\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["total"], 14);
    assert_eq!(value["category_discounts"][0]["category"], "Cheap");
    assert_eq!(value["items"][0]["name"], "Order-1");
}

#[test]
fn test_format_from_environment() {
    tiercart()
        .env("TIERCART_FORMAT", "json")
        .write_stdin("1\n1 15\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 14"));
}

#[test]
fn test_malformed_price_is_fatal() {
    tiercart()
        .write_stdin("2\n1 30\n2 abc\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"))
        .stderr(predicate::str::contains("price 'abc'"));
}

#[test]
fn test_price_beyond_total_range_is_fatal() {
    tiercart()
        .write_stdin("2\n1 9223372036854775807\n1 9223372036854775807\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("price must be between 0 and 2147483648"));
}

#[test]
fn test_error_reported_once() {
    let output = tiercart().write_stdin("1\n1 abc\n").output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr.matches("price 'abc'").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_truncated_input_is_fatal() {
    tiercart()
        .write_stdin("3\n1 30\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected 3 order lines"));
}

#[test]
fn test_input_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("orders.txt");
    fs::write(&path, "1\n9 5\n").unwrap();

    tiercart()
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout("Total Amount: 5\nOrder-9 (1 items)\n");
}

#[test]
fn test_config_file_replaces_brackets() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("tiercart.toml");
    fs::write(
        &config,
        r#"
[pricing]
fallback_percent = 0

[[pricing.brackets]]
above = 10
at_most = 20
rate = 20
category = "moderate"

[[pricing.brackets]]
above = 20
rate = 30
category = "expensive"
"#,
    )
    .unwrap();

    // 30 → 21 (9 off), 15 → 12 (3 off), 5 → 5
    tiercart()
        .arg("--config")
        .arg(&config)
        .write_stdin("3\n1 30\n2 15\n3 5\n")
        .assert()
        .success()
        .stdout(
            "Total Amount: 38\n\
             Moderate Category Discount: 3\n\
             Expensive Category Discount: 9\n\
             Order-1 (1 items)\n\
             Order-2 (1 items)\n\
             Order-3 (1 items)\n",
        );
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("tiercart.toml");
    fs::write(&config, "format = \"yaml\"\n").unwrap();

    tiercart()
        .arg("--config")
        .arg(&config)
        .write_stdin("0\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_logs_stay_off_stdout() {
    tiercart()
        .arg("-vv")
        .write_stdin("1\n1 15\n")
        .assert()
        .success()
        .stdout("Total Amount: 14\nCheap Category Discount: 1\nOrder-1 (1 items)\n")
        .stderr(predicate::str::contains("Computed cart total"));
}

#[test]
fn test_usage_error_uses_clap_exit_code() {
    tiercart()
        .args(["-q", "-v"])
        .write_stdin("0\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}
