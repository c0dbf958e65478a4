//! imu replay tool
//!
//! Feeds a JSON command script through the root store and prints the
//! final state.
//!
//! Usage:
//!   imu-replay script.json --pretty
//!
//! Logs go to stderr so stdout stays valid JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use imu_replay::{Variant, load_script, render, run};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "imu-replay")]
#[command(about = "Replay entity commands through the imu store")]
struct Args {
    /// Path to the JSON command script
    script: PathBuf,

    /// Reducer to run
    #[arg(long, value_enum, default_value_t = Variant::Canonical)]
    variant: Variant,

    /// Pretty-print the resulting state
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let commands = load_script(&args.script)?;
    info!(commands = commands.len(), variant = ?args.variant, "replaying");
    let state = run(&commands, args.variant)?;
    println!("{}", render(&state, args.pretty)?);
    Ok(())
}
