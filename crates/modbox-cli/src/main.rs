mod cli;
mod session;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use modbox_core::Config;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never land on the drawn screen
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("modbox=warn,modbox_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = load_config(&args);
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    config.validate().context("Invalid settings")?;

    session::run(&config, &args.entries, args.output)
}

/// Load config from file, falling back to defaults
fn load_config(args: &Args) -> Config {
    if !args.config.exists() {
        debug!("No config file at {:?}, using defaults", args.config);
        return Config::default();
    }

    match Config::load(&args.config) {
        Ok(config) => {
            info!("Loaded config from {:?}", args.config);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}
