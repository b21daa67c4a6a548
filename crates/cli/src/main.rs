// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vapor - a theatrical startup build pipeline for your terminal
//!
//! Nothing here is real. Synthetic stakeholders vote for an imaginary
//! venture, an imaginary AI plans and "builds" it against a launch
//! countdown, and the terminal gets to watch.

mod render;
mod strings;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use vapor_core::{ChaChaEntropy, SimConfig, SystemClock};
use vapor_engine::Engine;

use crate::strings::Lang;

#[derive(Parser)]
#[command(
    name = "vapor",
    version,
    about = "Vapor - watch an imaginary AI build an imaginary company"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo pipeline end to end
    Run(RunArgs),
    /// Print the active configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Seed for a replayable run; omit for a fresh one
    #[arg(long)]
    seed: Option<u64>,

    /// Language bundle for the renderer
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Divide every timer period by this factor
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// TOML config overriding the built-in timings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of full pipeline cycles to run
    #[arg(long, default_value_t = 1)]
    cycles: u32,

    /// Emit one JSON snapshot per frame instead of themed output
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ConfigArgs {
    /// TOML config to merge over the defaults before printing
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            tokio::select! {
                result = run(args) => result,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted");
                    Ok(())
                }
            }
        }
        Commands::Config(args) => {
            let config = load_config(args.config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    Ok(config)
}

async fn run(args: RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?.accelerated(args.speed);
    let entropy = match args.seed {
        Some(seed) => ChaChaEntropy::seeded(seed),
        None => ChaChaEntropy::from_os(),
    };

    let mut engine = Engine::new(config, SystemClock, entropy)?;
    let bundle = strings::bundle(args.lang);

    for cycle in 1..=args.cycles.max(1) {
        let run_id = Uuid::new_v4();
        tracing::info!(run = %run_id, cycle, "cycle started");

        if cycle > 1 {
            engine.reset();
        }

        let mut renderer = render::Renderer::new(bundle, args.json);
        renderer.frame(&engine.snapshot());

        // The operator clicks through the stages; each action settles
        // before the next one is available
        engine.start_voting();
        renderer.frame(&engine.snapshot());
        engine
            .run_until_settled(|snapshot, _| renderer.frame(&snapshot))
            .await;

        engine.approve();
        renderer.frame(&engine.snapshot());
        engine
            .run_until_settled(|snapshot, _| renderer.frame(&snapshot))
            .await;

        engine.execute();
        renderer.frame(&engine.snapshot());
        engine
            .run_until_settled(|snapshot, _| renderer.frame(&snapshot))
            .await;

        renderer.frame(&engine.snapshot());
        tracing::info!(run = %run_id, cycle, "cycle complete");
    }

    Ok(())
}
