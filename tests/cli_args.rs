//! Tests for CLI argument parsing and startup failures.
//!
//! These run the built binary. Every case fails before the terminal UI
//! starts, so no TTY is needed.

mod common;

use common::temp_file;
use std::process::Command;

fn usercards_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_usercards"))
}

#[test]
fn test_help_lists_options() {
    let output = usercards_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--feed"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--seed"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntick_rate_ms = 1\n");
    let output = usercards_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to load configuration"));
    assert!(stderr.contains("tick_rate_ms"));
}

#[test]
fn test_missing_feed_exits_with_error() {
    let (_dir, config) = temp_file("config.toml", "");
    let output = usercards_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--feed")
        .arg("/no/such/feed.json")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read feed file"));
}

#[test]
fn test_invalid_seed_rejected_by_clap() {
    let output = usercards_cmd()
        .arg("--seed")
        .arg("not-a-number")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--seed"));
}
