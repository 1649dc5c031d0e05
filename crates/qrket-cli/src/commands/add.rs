//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use qrket_core::{Network, RecordDraft, RecordStore};
use qrket_file::FileStore;

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Record title
    pub title: String,

    /// Target URL
    pub url: String,

    /// Catalog network key (see 'qrket networks')
    #[arg(long, short = 'n', default_value = "website")]
    pub network: String,

    /// Optional description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

pub fn run(store: &FileStore, args: AddArgs) -> Result<()> {
    let network = Network::from_key(&args.network).context("Unknown network key")?;

    let mut draft = RecordDraft::new(&args.title, &args.url, network);
    if let Some(description) = &args.description {
        draft = draft.with_description(description);
    }

    let record = store.create(draft).context("Failed to create record")?;

    // Output the created record's id
    println!("{}", record.id);
    output::success(&format!(
        "Created '{}' ({})",
        record.title, record.network.name
    ));

    Ok(())
}
