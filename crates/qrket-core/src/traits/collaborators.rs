//! External collaborator seams.
//!
//! Clipboard, share sheet, and URL opening live outside the core. All of
//! them are fire-and-forget: callers log failures and move on.

use crate::error::CollaboratorError;
use crate::linkpage::ProfileSummary;

/// Clipboard write primitive.
pub trait Clipboard {
    /// Place the text on the clipboard.
    fn write_text(&self, text: &str) -> Result<(), CollaboratorError>;
}

/// Share-sheet primitive.
pub trait ShareSheet {
    /// Offer the profile summary to the platform share surface.
    fn share(&self, summary: &ProfileSummary) -> Result<(), CollaboratorError>;
}

/// Opens a URL in a new external context.
pub trait UrlOpener {
    /// Open the URL.
    fn open_url(&self, url: &str) -> Result<(), CollaboratorError>;
}
