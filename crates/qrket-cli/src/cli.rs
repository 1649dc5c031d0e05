//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::delete::DeleteArgs;
use crate::commands::export::ExportArgs;
use crate::commands::linkpage::LinkpageArgs;
use crate::commands::list::ListArgs;
use crate::commands::networks::NetworksArgs;

/// QR code generator and link-in-bio page.
#[derive(Parser, Debug)]
#[command(name = "qrket")]
#[command(author, version = env!("QRKET_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Data directory override (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new QR code record
    Add(AddArgs),

    /// List records, optionally filtered by query and network
    List(ListArgs),

    /// Delete one or more records by id
    Delete(DeleteArgs),

    /// Export records as PNG images
    Export(ExportArgs),

    /// Show the social network catalog
    Networks(NetworksArgs),

    /// Print the public link page feed
    Linkpage(LinkpageArgs),
}
