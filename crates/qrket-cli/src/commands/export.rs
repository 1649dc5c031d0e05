//! Export command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use qrket_core::{NetworkFilter, QrRecord, RecordId, RecordStore, SelectionSet, filter};
use qrket_file::FileStore;
use qrket_render::{export_batch, render_svg};

use crate::output;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Record ids to export (or use --all to export the filtered view)
    pub ids: Vec<String>,

    /// Select every record matching the filters
    #[arg(long, conflicts_with = "ids")]
    pub all: bool,

    /// Text query over title, URL, and description (with --all)
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Network filter: a catalog key, or "all" (with --all)
    #[arg(long, short = 'n', default_value = "all")]
    pub network: String,

    /// Output directory
    #[arg(long, short = 'o', default_value = ".")]
    pub out: PathBuf,

    /// Rendered QR size in pixels (the exported canvas is always 512x512)
    #[arg(long, default_value_t = 200)]
    pub size: u32,
}

pub fn run(store: &FileStore, args: ExportArgs) -> Result<()> {
    let records = store.list().context("Failed to list records")?;

    // Build the selection: explicit ids, or the whole filtered view.
    let mut selection = SelectionSet::new();
    if args.all {
        let network = NetworkFilter::parse(&args.network).context("Invalid network filter")?;
        let view: Vec<RecordId> = filter(&records, &args.query, network)
            .iter()
            .map(|record| record.id.clone())
            .collect();
        selection.select_all(view);
    } else {
        if args.ids.is_empty() {
            bail!("Nothing to export: pass record ids or --all");
        }
        for id in &args.ids {
            selection.toggle(RecordId::new(id.as_str()).context("Invalid record id")?);
        }
    }

    let selected: Vec<&QrRecord> = records
        .iter()
        .filter(|record| selection.contains(&record.id))
        .collect();

    fs::create_dir_all(&args.out).context("Failed to create output directory")?;

    let written = export_batch(
        &selected,
        |record| render_svg(&record.url, args.size).ok(),
        &args.out,
    );

    for path in &written {
        println!("{}", path.display());
    }
    output::success(&format!(
        "Exported {} of {} selected record(s)",
        written.len(),
        selected.len()
    ));

    Ok(())
}
