//! Core data types for parsed honeypot report entries.

/// Geolocation fields attached to an attack record.
///
/// All fields are trimmed of surrounding whitespace during parsing.
/// `country` is a short uppercase code (e.g., "US", "CN").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    /// City name (free-form).
    pub city: String,
    /// State, province, or region (free-form).
    pub state: String,
    /// Short uppercase country code.
    pub country: String,
}

/// One parsed entry describing a single source IP's intrusion attempts.
///
/// Every field other than `attempts` is optional: the report format is
/// semi-structured and a block with malformed sub-fields still yields a
/// record with those fields absent. Records are immutable once produced;
/// the full sequence is rebuilt on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackRecord {
    /// Dotted-quad source address, absent when the IP line did not match.
    pub ip: Option<String>,
    /// Connection attempt count. Defaults to 0 when unparsable.
    pub attempts: u64,
    /// Autonomous system number of the origin network.
    pub asn: Option<String>,
    /// Geolocation, absent when the location line was missing or malformed.
    pub location: Option<GeoLocation>,
    /// `[latitude, longitude]` in floating-point degrees.
    pub coordinates: Option<[f64; 2]>,
}

impl AttackRecord {
    /// Creates a record with all optional fields absent and zero attempts.
    pub fn empty() -> Self {
        Self {
            ip: None,
            attempts: 0,
            asn: None,
            location: None,
            coordinates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_has_no_fields() {
        let record = AttackRecord::empty();
        assert!(record.ip.is_none());
        assert_eq!(record.attempts, 0);
        assert!(record.asn.is_none());
        assert!(record.location.is_none());
        assert!(record.coordinates.is_none());
    }
}
