//! qrket - QR code generator and link-in-bio page CLI.
//!
//! This is a thin wrapper over the qrket libraries: create and manage QR
//! code records, export them as PNG images, and print the public link
//! page.

mod cli;
mod collaborators;
mod commands;
mod data_dir;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let store = data_dir::store(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Add(args) => commands::add::run(&store, args),
        Commands::List(args) => commands::list::run(&store, args),
        Commands::Delete(args) => commands::delete::run(&store, args),
        Commands::Export(args) => commands::export::run(&store, args),
        Commands::Networks(args) => commands::networks::run(args),
        Commands::Linkpage(args) => commands::linkpage::run(&store, args),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
