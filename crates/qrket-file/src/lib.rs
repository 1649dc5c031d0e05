//! qrket-file - Filesystem-backed record store.

mod store;

pub use store::{FileStore, SLOT_NAMESPACE};
