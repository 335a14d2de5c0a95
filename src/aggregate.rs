//! Aggregation of attack records into ranked buckets and totals.
//!
//! Three independent pure reducers over the record sequence: by origin
//! network, by country, and global totals. Grouped sums are
//! order-independent; only tie-break ordering among equal sums follows the
//! first-encountered insertion order.

use std::collections::{HashMap, HashSet};

use crate::config::TOP_ENTRIES;
use crate::models::AttackRecord;

/// One ranked aggregate bucket: a key (origin network or country code)
/// mapped to its summed attempt count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankedEntry {
    /// Grouping key (ASN id or country code).
    pub key: String,
    /// Summed connection attempts for the key.
    pub attempts: u64,
}

/// Global summary statistics across every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TrafficTotals {
    /// Sum of attempts across all records, regardless of other fields.
    pub total_attempts: u64,
    /// Count of distinct source addresses. Records with an absent address
    /// collapse into a single "unknown" member, so they inflate the count
    /// by at most one per load.
    pub unique_sources: usize,
}

/// Sums attempts grouped by origin network, skipping records without an ASN.
pub fn rank_by_network(records: &[AttackRecord]) -> Vec<RankedEntry> {
    rank(records.iter().filter_map(|r| {
        r.asn.as_deref().map(|asn| (asn, r.attempts))
    }))
}

/// Sums attempts grouped by country code, skipping records without a location.
pub fn rank_by_country(records: &[AttackRecord]) -> Vec<RankedEntry> {
    rank(records.iter().filter_map(|r| {
        r.location
            .as_ref()
            .map(|loc| (loc.country.as_str(), r.attempts))
    }))
}

/// Computes global totals across every record.
pub fn traffic_totals(records: &[AttackRecord]) -> TrafficTotals {
    let total_attempts = records.iter().map(|r| r.attempts).sum();
    let unique_sources = records
        .iter()
        .map(|r| r.ip.as_deref())
        .collect::<HashSet<_>>()
        .len();
    TrafficTotals {
        total_attempts,
        unique_sources,
    }
}

/// Shared ranking fold: accumulate sums in first-encountered key order, then
/// stable-sort descending by sum and truncate to the top entries.
fn rank<'a>(pairs: impl Iterator<Item = (&'a str, u64)>) -> Vec<RankedEntry> {
    let mut order: Vec<RankedEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (key, attempts) in pairs {
        match index.get(key).copied() {
            Some(i) => order[i].attempts += attempts,
            None => {
                index.insert(key.to_string(), order.len());
                order.push(RankedEntry {
                    key: key.to_string(),
                    attempts,
                });
            }
        }
    }

    // Stable sort keeps insertion order among equal sums
    order.sort_by(|a, b| b.attempts.cmp(&a.attempts));
    order.truncate(TOP_ENTRIES);
    order
}
