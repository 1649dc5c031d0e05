//! The public link-page projection.
//!
//! A read-only transform of the record list into a profile-style feed,
//! plus the process-local view counter. Nothing here touches the store.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::{QrRecord, RecordId};
use crate::traits::{Clipboard, ShareSheet, UrlOpener};

/// Starting value of the view counter. Process-local, never persisted.
pub const VIEW_COUNT_SEED: u64 = 1247;

/// Profile shown at the top of the link page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "My Company".to_string(),
            description: "Connect with us through our social networks".to_string(),
            location: "São Paulo, Brazil".to_string(),
            email: "contact@mycompany.com".to_string(),
            phone: "+55 11 99999-9999".to_string(),
            website: "https://mycompany.com".to_string(),
        }
    }
}

/// Payload handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub title: String,
    pub text: String,
}

/// The projected link page: profile, feed, and view counter.
#[derive(Debug, Clone)]
pub struct LinkPage {
    profile: Profile,
    entries: Vec<QrRecord>,
    view_count: u64,
}

impl LinkPage {
    /// Project the full record list into a feed, unconditionally and in
    /// order.
    pub fn project(records: &[QrRecord], profile: Profile) -> Self {
        Self {
            profile,
            entries: records.to_vec(),
            view_count: VIEW_COUNT_SEED,
        }
    }

    /// The feed entries, in store order.
    pub fn entries(&self) -> &[QrRecord] {
        &self.entries
    }

    /// The page profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Current view count.
    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    /// The share payload for this page.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            title: self.profile.name.clone(),
            text: self.profile.description.clone(),
        }
    }

    /// A link was clicked: bump the view counter and ask the opener to
    /// launch the record's URL. Returns false when the id is not in the
    /// feed. Opener failures are logged, never surfaced.
    pub fn record_clicked(&mut self, id: &RecordId, opener: &dyn UrlOpener) -> bool {
        let Some(entry) = self.entries.iter().find(|record| &record.id == id) else {
            return false;
        };
        self.view_count += 1;
        if let Err(e) = opener.open_url(&entry.url) {
            warn!(url = %entry.url, error = %e, "failed to open link");
        }
        true
    }

    /// Copy a record's URL via the clipboard collaborator. Returns false
    /// when the id is not in the feed. Failures are logged, never
    /// surfaced.
    pub fn copy_url(&self, id: &RecordId, clipboard: &dyn Clipboard) -> bool {
        let Some(entry) = self.entries.iter().find(|record| &record.id == id) else {
            return false;
        };
        if let Err(e) = clipboard.write_text(&entry.url) {
            warn!(url = %entry.url, error = %e, "failed to copy link");
        }
        true
    }

    /// Offer the profile summary to the share sheet. Failures are
    /// logged, never surfaced.
    pub fn share(&self, sheet: &dyn ShareSheet) {
        let summary = self.summary();
        if let Err(e) = sheet.share(&summary) {
            warn!(error = %e, "failed to share profile");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Network;
    use crate::error::CollaboratorError;
    use crate::record::RecordDraft;
    use chrono::Utc;
    use std::cell::RefCell;

    fn record(id: &str, title: &str) -> QrRecord {
        QrRecord::from_draft(
            RecordDraft::new(title, "https://example.com/x", Network::Website),
            RecordId::new(id).unwrap(),
            Utc::now(),
        )
        .unwrap()
    }

    #[derive(Default)]
    struct SpyOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl UrlOpener for SpyOpener {
        fn open_url(&self, url: &str) -> Result<(), CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError::OpenUrl {
                    url: url.to_string(),
                    message: "no display".to_string(),
                });
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn write_text(&self, _text: &str) -> Result<(), CollaboratorError> {
            Err(CollaboratorError::Clipboard {
                message: "denied".to_string(),
            })
        }
    }

    #[test]
    fn projection_keeps_every_record_in_order() {
        let records = vec![record("a", "First"), record("b", "Second")];
        let page = LinkPage::project(&records, Profile::default());
        let titles: Vec<&str> = page.entries().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn counter_starts_at_seed_and_increments_on_click() {
        let records = vec![record("a", "First")];
        let mut page = LinkPage::project(&records, Profile::default());
        assert_eq!(page.view_count(), VIEW_COUNT_SEED);

        let opener = SpyOpener::default();
        assert!(page.record_clicked(&RecordId::new("a").unwrap(), &opener));
        assert_eq!(page.view_count(), VIEW_COUNT_SEED + 1);
        assert_eq!(opener.opened.borrow().as_slice(), ["https://example.com/x"]);
    }

    #[test]
    fn unknown_id_does_not_count_as_a_view() {
        let records = vec![record("a", "First")];
        let mut page = LinkPage::project(&records, Profile::default());
        let opener = SpyOpener::default();
        assert!(!page.record_clicked(&RecordId::new("ghost").unwrap(), &opener));
        assert_eq!(page.view_count(), VIEW_COUNT_SEED);
    }

    #[test]
    fn opener_failure_still_counts_the_view() {
        let records = vec![record("a", "First")];
        let mut page = LinkPage::project(&records, Profile::default());
        let opener = SpyOpener {
            fail: true,
            ..SpyOpener::default()
        };
        assert!(page.record_clicked(&RecordId::new("a").unwrap(), &opener));
        assert_eq!(page.view_count(), VIEW_COUNT_SEED + 1);
    }

    #[test]
    fn clipboard_failure_is_swallowed() {
        let records = vec![record("a", "First")];
        let page = LinkPage::project(&records, Profile::default());
        assert!(page.copy_url(&RecordId::new("a").unwrap(), &FailingClipboard));
    }

    #[test]
    fn summary_carries_name_and_description() {
        let page = LinkPage::project(&[], Profile::default());
        let summary = page.summary();
        assert_eq!(summary.title, "My Company");
        assert!(!summary.text.is_empty());
    }
}
