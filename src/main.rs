//! snakehost - host-side driver for a tick-based snake engine
//!
//! Bootstraps the engine, discovers its tick cadence, forwards raw key
//! codes, and invokes one simulation step per interval. The simulation
//! itself lives behind the `snakehost_core::Engine` trait.

mod config;
mod headless;
mod keymap;
mod scripted_input;
mod stub_engine;
mod window;

use anyhow::Result;
use config::DriverConfig;
use std::{env, path::PathBuf};
use stub_engine::StubEngine;
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting snakehost v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));

    let config = match cli.config.as_deref() {
        Some(path) => DriverConfig::load_from_path(path),
        None => DriverConfig::load(),
    };

    let tick_rate = cli.stub_tick_rate.unwrap_or(stub_engine::DEFAULT_TICK_RATE);
    let engine = StubEngine::new(tick_rate);

    if cli.headless {
        return headless::run(
            engine,
            headless::HeadlessConfig {
                scripted_input: cli.scripted_input,
                max_ticks: cli.max_ticks,
            },
        );
    }

    if cli.scripted_input.is_some() {
        tracing::warn!("--scripted-input has no effect without --headless");
    }
    if cli.max_ticks.is_some() {
        tracing::warn!("--max-ticks has no effect without --headless");
    }

    window::run(engine, &config)
}

#[derive(Clone)]
struct CliOptions {
    headless: bool,
    max_ticks: Option<u64>,
    scripted_input: Option<PathBuf>,
    config: Option<PathBuf>,
    stub_tick_rate: Option<u32>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            headless: false,
            max_ticks: None,
            scripted_input: None,
            config: None,
            stub_tick_rate: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--headless" => opts.headless = true,
                "--max-ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.max_ticks = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--max-ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--max-ticks requires an integer");
                    }
                }
                "--scripted-input" => {
                    if let Some(path) = args.next() {
                        opts.scripted_input = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--scripted-input requires a file path");
                    }
                }
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--stub-tick-rate" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u32>() {
                            Ok(value) if value > 0 => opts.stub_tick_rate = Some(value),
                            Ok(_) => {
                                tracing::error!("--stub-tick-rate must be positive");
                            }
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--stub-tick-rate must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--stub-tick-rate requires an integer");
                    }
                }
                _ => {}
            }
        }

        opts
    }
}
