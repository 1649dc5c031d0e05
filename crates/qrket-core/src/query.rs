//! Search and filtering over record lists.

use crate::catalog::Network;
use crate::error::Error;
use crate::record::QrRecord;

/// Network predicate for gallery filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkFilter {
    /// Match every record.
    #[default]
    All,
    /// Match records whose snapshot carries this network's display name.
    Only(Network),
}

impl NetworkFilter {
    /// Parse a filter from user input: `"all"` or a catalog key.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown keys.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s == "all" {
            Ok(NetworkFilter::All)
        } else {
            Ok(NetworkFilter::Only(Network::from_key(s)?))
        }
    }
}

/// Filter records by a text query and a network predicate, preserving
/// input order.
///
/// A record matches the query when the case-insensitive substring occurs
/// in its title, URL, or description. The empty query matches everything.
/// Both predicates must hold.
pub fn filter<'a>(
    records: &'a [QrRecord],
    query: &str,
    network: NetworkFilter,
) -> Vec<&'a QrRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(record, &needle) && matches_network(record, network))
        .collect()
}

fn matches_query(record: &QrRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.url.to_lowercase().contains(needle)
        || record
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

// Matches on the display name carried in the snapshot, not the catalog
// key. Two keys sharing a display name would conflate here; kept because
// existing data may rely on it.
fn matches_network(record: &QrRecord, filter: NetworkFilter) -> bool {
    match filter {
        NetworkFilter::All => true,
        NetworkFilter::Only(network) => record.network.name == network.info().name,
    }
}
