use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where raw user records are read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// JSON feed file. The bundled demo feed is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where a restored user lands in the active list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestorePlacement {
    /// End of the list.
    #[default]
    Append,
    /// Its (age, company name) position.
    Sorted,
}

/// User list behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub restore_placement: RestorePlacement,
}

/// Counter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Count shown at startup (default: 0).
    #[serde(default)]
    pub initial: u64,
    /// Single-character key → counter action name (e.g. "+" = "increment").
    #[serde(default = "default_counter_bindings")]
    pub bindings: BTreeMap<String, String>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            bindings: default_counter_bindings(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/usercards/usercards.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_counter_bindings() -> BTreeMap<String, String> {
    [
        ("+", "increment"),
        ("x", "incrementRandom"),
        ("o", "incrementOdd"),
        ("-", "decrement"),
        ("0", "reset"),
    ]
    .into_iter()
    .map(|(key, action)| (key.to_string(), action.to_string()))
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}
