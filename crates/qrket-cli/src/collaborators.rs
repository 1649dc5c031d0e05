//! CLI-side collaborator implementations.
//!
//! A terminal has no native clipboard or share sheet; these write to the
//! standard streams instead, keeping the same fire-and-forget contract.

use qrket_core::error::CollaboratorError;
use qrket_core::{Clipboard, ProfileSummary, ShareSheet, UrlOpener};

/// Opens URLs with the platform handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError> {
        open::that(url).map_err(|e| CollaboratorError::OpenUrl {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Clipboard stand-in that prints the text for the shell to capture.
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<(), CollaboratorError> {
        println!("{text}");
        Ok(())
    }
}

/// Share sheet stand-in that prints the summary.
pub struct StdoutShareSheet;

impl ShareSheet for StdoutShareSheet {
    fn share(&self, summary: &ProfileSummary) -> Result<(), CollaboratorError> {
        println!("{}: {}", summary.title, summary.text);
        Ok(())
    }
}
