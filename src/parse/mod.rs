//! Report parsing.
//!
//! The raw report is a sequence of blocks, each introduced by the literal
//! `[+]` marker and containing one or more lines of labeled free-form text:
//!
//! ```text
//! [+] IP: 203.0.113.7 - 14 attempts
//! ASN: 64512
//! Location: Springfield, IL, US
//! Lat/Lon: 39.78, -89.65
//! ```
//!
//! Parsing never drops a block once split: malformed sub-fields degrade to
//! absent/default values and the block still yields a record.

mod fields;

use crate::config::BLOCK_DELIMITER;
use crate::models::AttackRecord;

/// Parses raw report text into an ordered sequence of attack records.
///
/// Blocks are introduced by the `[+]` marker; text before the first marker
/// is not a block, so input with zero markers yields an empty sequence.
/// Whitespace-only blocks are dropped. Each remaining block yields exactly
/// one record, however malformed its fields are.
pub fn parse_report(raw: &str) -> Vec<AttackRecord> {
    raw.split(BLOCK_DELIMITER)
        .skip(1)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .collect()
}

/// Parses a single trimmed, non-empty block into a record.
fn parse_block(block: &str) -> AttackRecord {
    let lines: Vec<&str> = block.lines().collect();

    let mut record = AttackRecord::empty();
    if let Some(first_line) = lines.first() {
        if let Some((ip, attempts)) = fields::extract_source(first_line) {
            record.ip = Some(ip);
            record.attempts = attempts;
        }
    }
    record.asn = fields::extract_asn(&lines);
    record.location = fields::extract_location(&lines);
    record.coordinates = fields::extract_coordinates(&lines);
    record
}
