//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use qrket_core::{NetworkFilter, RecordStore, filter};
use qrket_file::FileStore;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Text query over title, URL, and description
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Network filter: a catalog key, or "all"
    #[arg(long, short = 'n', default_value = "all")]
    pub network: String,

    /// Output records as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(store: &FileStore, args: ListArgs) -> Result<()> {
    let network = NetworkFilter::parse(&args.network).context("Invalid network filter")?;

    let records = store.list().context("Failed to list records")?;
    let shown = filter(&records, &args.query, network);

    if shown.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    for record in &shown {
        if args.pretty {
            output::json_pretty(record)?;
        } else if args.json {
            output::json(record)?;
        } else {
            println!(
                "{}  {}  {}",
                record.id.to_string().dimmed(),
                record.title.bold(),
                record.network.name
            );
            output::field("  url", &record.url);
            if let Some(description) = &record.description {
                output::field("  description", description);
            }
            output::field("  created", &record.created_at.to_rfc3339());
        }
    }

    eprintln!();
    eprintln!(
        "{}",
        format!("{} created, {} shown", records.len(), shown.len()).dimmed()
    );

    Ok(())
}
