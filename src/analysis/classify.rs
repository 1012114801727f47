use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Posture, Tier};

/// Above this many characters the record counts as complete.
pub const TIER_A_MIN_CHARS: usize = 10_000;
/// Above this many characters the record counts as an excerpt.
pub const TIER_B_MIN_CHARS: usize = 1_000;

/// Marker phrases per posture. Checked top to bottom; first hit wins.
const POSTURE_MARKERS: &[(Posture, &[&str])] = &[
    (
        Posture::Cert,
        &["petition for writ of certiorari", "cert petition"],
    ),
    (
        Posture::Emergency,
        &["emergency application", "stay pending"],
    ),
    (Posture::Merits, &["merits brief", "brief for petitioner"]),
    (Posture::Backtest, &["oral argument transcript"]),
];

static DOCKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bNo\.\s*(\d{2}-\d{1,5}[A-Z]?)\b").expect("Invalid docket regex pattern")
});

/// Detect the procedural posture from marker phrases. Defaults to cert.
pub fn detect_posture(text: &str) -> Posture {
    let lower = text.to_lowercase();

    POSTURE_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map(|(posture, _)| *posture)
        .unwrap_or_default()
}

/// Bucket the supplied material by size.
///
/// A docket reference alone does not lift a case out of tier C; the flag is
/// accepted so callers can pass what they know.
pub fn classify_tier(text_len: usize, has_docket: bool) -> Tier {
    if text_len > TIER_A_MIN_CHARS {
        Tier::A
    } else if text_len > TIER_B_MIN_CHARS {
        Tier::B
    } else {
        if has_docket {
            tracing::trace!(text_len, "Docket supplied without enough material; tier C");
        }
        Tier::C
    }
}

/// First `No. NN-NNNN` docket reference in the text.
pub fn detect_docket(text: &str) -> Option<String> {
    DOCKET_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
