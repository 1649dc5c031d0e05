//! QR code records and their creation inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::catalog::{Network, NetworkSnapshot};
use crate::error::{Error, ValidationError};

/// A validated record identifier.
///
/// Ids are opaque strings, unique within a store. The file store
/// generates them from random UUIDs; any non-empty string without
/// whitespace is accepted at parse boundaries so that existing data
/// keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a record id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.is_empty() {
            return Err(ValidationError::RecordId {
                value: s,
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ValidationError::RecordId {
                value: s,
                reason: "must not contain whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(s))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::new(s).map_err(serde::de::Error::custom)
    }
}

/// Creation input for a record.
///
/// Validation happens here, before the store mutates anything.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    /// Record title, shown in the gallery and link page.
    pub title: String,
    /// Target URL the QR code points at.
    pub url: String,
    /// Catalog entry to snapshot into the record.
    pub network: Network,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl RecordDraft {
    /// Create a draft with no description.
    pub fn new(title: impl Into<String>, url: impl Into<String>, network: Network) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            network,
            description: None,
        }
    }

    /// Attach a description to the draft.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title is empty, the URL is
    /// empty, or the URL does not parse.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl.into());
        }
        Url::parse(&self.url).map_err(|e| ValidationError::Url {
            value: self.url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn normalized_description(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

/// A stored QR code record.
///
/// Immutable once created; the only lifecycle transition is deletion.
/// The `network` field is a snapshot taken at creation time, not a live
/// reference to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRecord {
    /// Unique id, assigned at creation and never reassigned.
    pub id: RecordId,
    /// Record title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Catalog snapshot taken at creation time.
    pub network: NetworkSnapshot,
    /// Creation timestamp, serialized as ISO-8601.
    pub created_at: DateTime<Utc>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QrRecord {
    /// Build a record from a draft, stamping the given id and timestamp.
    ///
    /// Empty or whitespace-only descriptions normalize to `None`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the draft is invalid.
    pub fn from_draft(
        draft: RecordDraft,
        id: RecordId,
        created_at: DateTime<Utc>,
    ) -> Result<Self, Error> {
        draft.validate()?;
        let description = draft.normalized_description();
        Ok(Self {
            id,
            title: draft.title,
            url: draft.url,
            network: draft.network.into(),
            created_at,
            description,
        })
    }
}
