use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::user::RawUser;

const DEMO_FEED: &str = include_str!("../../data/users.json");

/// Errors that can occur when loading the user feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read feed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feed from {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the raw user records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// The feed bundled with the binary.
    Demo,
    /// A JSON array of user records on disk.
    File(PathBuf),
}

impl FeedSource {
    /// Picks the file when one is configured, otherwise the bundled feed.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Demo, Self::File)
    }

    /// Reads and parses the feed.
    pub fn load(&self) -> Result<Vec<RawUser>, FeedError> {
        match self {
            Self::Demo => parse_feed(DEMO_FEED, "bundled demo feed"),
            Self::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| FeedError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;
                parse_feed(&content, &format!("'{}'", path.display()))
            }
        }
    }
}

/// Parses a JSON array of raw user records.
pub fn parse_feed(json: &str, origin: &str) -> Result<Vec<RawUser>, FeedError> {
    serde_json::from_str(json).map_err(|e| FeedError::ParseError {
        origin: origin.to_string(),
        source: e,
    })
}
