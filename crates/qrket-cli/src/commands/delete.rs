//! Delete command implementation.

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Args;

use qrket_core::{RecordId, RecordStore};
use qrket_file::FileStore;

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record ids to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub fn run(store: &FileStore, args: DeleteArgs) -> Result<()> {
    let ids = args
        .ids
        .iter()
        .map(|s| RecordId::new(s.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid record id")?;

    if let [id] = ids.as_slice() {
        store.delete_one(id).context("Failed to delete record")?;
        output::success(&format!("Deleted {id}"));
    } else {
        let ids: HashSet<RecordId> = ids.into_iter().collect();
        let count = ids.len();
        store
            .delete_many(&ids)
            .context("Failed to delete records")?;
        output::success(&format!("Deleted {count} record(s)"));
    }

    Ok(())
}
