//! Core traits for store and collaborator behavior.

mod collaborators;
mod store;

pub use collaborators::{Clipboard, ShareSheet, UrlOpener};
pub use store::RecordStore;
