//! Per-field extractors for report blocks.
//!
//! Each extractor is a pure function returning an `Option`: a pattern miss
//! degrades the field to absent rather than failing the block. Duplicate
//! label lines resolve to the first match.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::GeoLocation;

/// Helper to compile a static regex pattern, panicking with a detailed
/// message if compilation fails. Used only for compile-time constant
/// patterns, where failure is a programming error.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Extracts the source address and attempt count from the block's first line.
///
/// Matches `IP: <dotted-quad> - <integer> attempts`. Returns `None` when the
/// line does not match; an attempt count too large for `u64` degrades to 0.
pub(crate) fn extract_source(first_line: &str) -> Option<(String, u64)> {
    static SOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
        compile_regex_unsafe(r"IP: ([\d.]+) - (\d+) attempts", "SOURCE_PATTERN")
    });

    let caps = SOURCE_PATTERN.captures(first_line)?;
    let ip = caps.get(1)?.as_str().to_string();
    let attempts = caps
        .get(2)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0);
    Some((ip, attempts))
}

/// Extracts the origin-network identifier from the first line containing
/// the `ASN:` label.
pub(crate) fn extract_asn(lines: &[&str]) -> Option<String> {
    static ASN_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| compile_regex_unsafe(r"ASN: (\d+)", "ASN_PATTERN"));

    let line = lines.iter().find(|l| l.contains("ASN:"))?;
    let caps = ASN_PATTERN.captures(line)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Extracts city, state, and country from the first line containing the
/// `Location:` label.
///
/// The country field must be a short uppercase code; otherwise the whole
/// location is treated as absent.
pub(crate) fn extract_location(lines: &[&str]) -> Option<GeoLocation> {
    static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
        compile_regex_unsafe(r"Location: ([^,]+), ([^,]+), ([A-Z]+)", "LOCATION_PATTERN")
    });

    let line = lines.iter().find(|l| l.contains("Location:"))?;
    let caps = LOCATION_PATTERN.captures(line)?;
    Some(GeoLocation {
        city: caps.get(1)?.as_str().trim().to_string(),
        state: caps.get(2)?.as_str().trim().to_string(),
        country: caps.get(3)?.as_str().trim().to_string(),
    })
}

/// Extracts `[latitude, longitude]` from the first line containing the
/// `Lat/Lon:` label.
///
/// Values that fail to parse as finite floats (e.g., `1.2.3`) make the whole
/// pair absent.
pub(crate) fn extract_coordinates(lines: &[&str]) -> Option<[f64; 2]> {
    static LATLON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
        compile_regex_unsafe(r"Lat/Lon: ([-\d.]+), ([-\d.]+)", "LATLON_PATTERN")
    });

    let line = lines.iter().find(|l| l.contains("Lat/Lon:"))?;
    let caps = LATLON_PATTERN.captures(line)?;
    let lat = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let lon = caps.get(2)?.as_str().parse::<f64>().ok()?;
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some([lat, lon])
}
