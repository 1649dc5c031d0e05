//! Link page command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use qrket_core::{LinkPage, Profile, RecordId, RecordStore};
use qrket_file::FileStore;

use crate::collaborators::{StdoutClipboard, StdoutShareSheet, SystemOpener};
use crate::output;

#[derive(Args, Debug)]
pub struct LinkpageArgs {
    /// Open this record's URL and count the view
    #[arg(long, value_name = "ID")]
    pub open: Option<String>,

    /// Print this record's URL (clipboard pass-through)
    #[arg(long, value_name = "ID")]
    pub copy: Option<String>,

    /// Emit the profile summary (share pass-through)
    #[arg(long)]
    pub share: bool,

    /// Output the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(store: &FileStore, args: LinkpageArgs) -> Result<()> {
    let records = store.list().context("Failed to list records")?;
    let mut page = LinkPage::project(&records, Profile::default());

    if let Some(id) = &args.copy {
        let id = RecordId::new(id.as_str()).context("Invalid record id")?;
        if !page.copy_url(&id, &StdoutClipboard) {
            eprintln!("{}", "No such record in the feed.".dimmed());
        }
        return Ok(());
    }

    if args.share {
        page.share(&StdoutShareSheet);
        return Ok(());
    }

    if let Some(id) = &args.open {
        let id = RecordId::new(id.as_str()).context("Invalid record id")?;
        if !page.record_clicked(&id, &SystemOpener) {
            eprintln!("{}", "No such record in the feed.".dimmed());
        }
    }

    if args.json {
        return output::json_pretty(&serde_json::json!({
            "profile": page.profile(),
            "viewCount": page.view_count(),
            "entries": page.entries(),
        }));
    }

    let profile = page.profile();
    println!("{}", profile.name.bold());
    println!("{}", profile.description);
    output::field("views", &page.view_count().to_string());
    println!();

    if page.entries().is_empty() {
        eprintln!("{}", "No links yet.".dimmed());
        return Ok(());
    }

    for record in page.entries() {
        println!("{}  {}", record.title.bold(), record.network.name.dimmed());
        output::field("  url", &record.url);
        if let Some(description) = &record.description {
            output::field("  description", description);
        }
    }

    Ok(())
}
