//! Error types for the qrket libraries.
//!
//! This module provides a unified error type with explicit variants for
//! validation, persistence, export, and collaborator errors.

use thiserror::Error;

/// The unified error type for qrket operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (empty title, malformed URL, unknown
    /// network key). Always rejected before any state is mutated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Durable slot read/write failures.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// QR rendering and image export failures.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// External collaborator failures (clipboard, share sheet, URL
    /// opener). Best-effort: callers log and swallow these.
    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The record title is empty or whitespace-only.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The record URL is empty or whitespace-only.
    #[error("url must not be empty")]
    EmptyUrl,

    /// The record URL does not parse as a URL.
    #[error("invalid url '{value}': {reason}")]
    Url { value: String, reason: String },

    /// The network key does not exist in the catalog.
    #[error("unknown network key '{key}'")]
    UnknownNetwork { key: String },

    /// Invalid record id format.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },
}

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading the slot failed in a way that cannot be degraded to an
    /// empty collection (e.g. locking).
    #[error("failed to read slot '{namespace}': {message}")]
    Read { namespace: String, message: String },

    /// Writing the slot failed. The previous committed state is intact.
    #[error("failed to write slot '{namespace}': {message}")]
    Write { namespace: String, message: String },

    /// The collection could not be serialized.
    #[error("failed to encode records: {message}")]
    Encode { message: String },
}

/// QR rendering and image export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The URL could not be encoded as a QR symbol.
    #[error("url could not be encoded as a qr symbol: {message}")]
    Unencodable { message: String },

    /// No rendered vector markup was available for the record.
    #[error("no rendered markup available for record '{id}'")]
    SourceMissing { id: String },

    /// The vector markup could not be parsed.
    #[error("markup could not be parsed: {message}")]
    Markup { message: String },

    /// Rasterization onto the output canvas failed.
    #[error("rasterization failed: {message}")]
    Raster { message: String },

    /// PNG encoding or writing the output file failed.
    #[error("failed to write image '{path}': {message}")]
    Write { path: String, message: String },
}

/// External collaborator errors.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// Clipboard write failed.
    #[error("clipboard write failed: {message}")]
    Clipboard { message: String },

    /// Share sheet invocation failed.
    #[error("share failed: {message}")]
    Share { message: String },

    /// Opening a URL in an external context failed.
    #[error("failed to open '{url}': {message}")]
    OpenUrl { url: String, message: String },
}
