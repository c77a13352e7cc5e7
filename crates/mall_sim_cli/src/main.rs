//! `mall-sim`: run single forecasts or strategy sweeps from the command line.
//!
//! Logging goes through `tracing`; set `RUST_LOG` to change the level
//! (default `info`).

mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Run(args) => commands::run(&args),
        Commands::Sweep(args) => commands::sweep(&args),
    };

    if let Err(err) = outcome {
        tracing::error!(error = %err, "mall-sim failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
