//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use tempfile::TempDir;
use usercards::config::RestorePlacement;
use usercards::domain::{Company, ListedUser, RawUser};
use usercards::engine::UserListEngine;

pub fn raw(username: &str, age: i64, company: &str) -> RawUser {
    RawUser {
        username: username.to_string(),
        address: serde_json::json!({ "city": format!("{}ville", username) }),
        age,
        company: Company {
            name: company.to_string(),
        },
    }
}

/// Feed with minors, age ties and mixed-case usernames.
pub fn sample_feed() -> Vec<RawUser> {
    vec![
        raw("bob", 17, "X"),
        raw("alice", 25, "Northwind"),
        raw("Albert", 25, "Contoso"),
        raw("carol", 40, "Acme"),
        raw("dave", 19, "Zenith"),
        raw("kid", 9, "Acme"),
    ]
}

pub fn engine_with(feed: &[RawUser], placement: RestorePlacement) -> UserListEngine {
    let mut engine = UserListEngine::with_seed(placement, 1234);
    engine.initialize(feed);
    engine
}

pub fn find<'a>(users: &'a [ListedUser], username: &str) -> &'a ListedUser {
    users
        .iter()
        .find(|u| u.username == username)
        .unwrap_or_else(|| panic!("{} not found", username))
}

pub fn usernames(users: &[ListedUser]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
