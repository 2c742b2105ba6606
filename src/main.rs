use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use usercards::config::Config;
use usercards::domain::FeedSource;
use usercards::engine::{CounterEngine, UserListEngine};
use usercards::logging::init_tracing;
use usercards::ui::app::App;
use usercards::ui::runtime;

/// Browse a user feed as cards, with remove, restore and search.
#[derive(Debug, Parser)]
#[command(name = "usercards", version, about)]
struct Cli {
    /// JSON feed of user records (overrides feed.path from config)
    #[arg(long, value_name = "PATH")]
    feed: Option<PathBuf>,

    /// Config file (default: ~/.config/usercards/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for id generation and random increments
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let source = FeedSource::from_path(cli.feed.or_else(|| config.feed.path.clone()));
    let raw = source.load()?;
    let bindings = config.counter.key_bindings()?;

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), ?source, "Starting usercards");

    let placement = config.list.restore_placement;
    let (mut users, counter) = match cli.seed {
        Some(seed) => (
            UserListEngine::with_seed(placement, seed),
            CounterEngine::with_seed(config.counter.initial, seed),
        ),
        None => (
            UserListEngine::new(placement),
            CounterEngine::new(config.counter.initial),
        ),
    };
    users.initialize(&raw);

    let app = App::new(users, counter, bindings);
    runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("Terminal UI failed")?;
    Ok(())
}
