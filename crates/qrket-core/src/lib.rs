//! qrket-core - Core types and logic for the qrket QR code toolkit.

pub mod catalog;
pub mod error;
pub mod linkpage;
pub mod query;
pub mod record;
pub mod selection;
pub mod traits;

pub use catalog::{Icon, Network, NetworkInfo, NetworkSnapshot};
pub use error::Error;
pub use linkpage::{LinkPage, Profile, ProfileSummary, VIEW_COUNT_SEED};
pub use query::{NetworkFilter, filter};
pub use record::{QrRecord, RecordDraft, RecordId};
pub use selection::SelectionSet;
pub use traits::{Clipboard, RecordStore, ShareSheet, UrlOpener};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
