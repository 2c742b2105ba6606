mod loader;
mod types;

pub use loader::{ConfigError, RESERVED_KEYS};
pub use types::{
    Config, CounterConfig, FeedConfig, ListConfig, LoggingConfig, RestorePlacement, UiConfig,
};
