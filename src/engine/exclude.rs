//! Exclusion word sets separating real timestamps from look-alikes.
//!
//! These are literal substring tests over the text around a located match,
//! not language understanding. The bias is conservative: better to miss a
//! real timestamp than to act on a duration, scale ratio, or clock-of-day
//! time.

use once_cell::sync::Lazy;

use crate::MatchSpan;
use crate::data::time_zones::{TIME_ZONE_CODES, TIME_ZONE_FIRST_WORDS};

/// Phrases that invalidate a match when the preceding text ends with them:
/// duration talk ("under", "less than", "sub"), schedule announcements
/// ("live at"), episode numbering, and record talk ("broke the").
const EXCLUDED_PREFIXES: &[&str] =
    &["under", "less than", "sub", "in", "episode", "live", "live at", "live in", "broke", "broke the"];

/// Words that invalidate a match when the following text starts with them:
/// clock-of-day markers, scale ratios, and every timezone marker.
static EXCLUDED_SUFFIXES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut suffixes: Vec<String> = ["am", "pm", "midday", "live", "scale"].iter().map(|s| s.to_string()).collect();
    suffixes.extend(TIME_ZONE_CODES.iter().map(|code| code.to_string()));
    suffixes.extend(TIME_ZONE_FIRST_WORDS.iter().cloned());
    suffixes
});

/// True if the text before the match, trimmed and lowercased, ends with an
/// excluded phrase. The test runs against the entire preceding text, so
/// multi-word phrases match across word boundaries.
pub(crate) fn has_excluded_prefix(title: &str, span: MatchSpan) -> bool {
    let preceding = title[..span.start].trim().to_lowercase();
    EXCLUDED_PREFIXES.iter().any(|prefix| preceding.ends_with(prefix))
}

/// True if the text after the match starts with an excluded word. Trimming
/// removes surrounding whitespace only, so a token glued directly to the
/// match is still visible to the prefix test.
pub(crate) fn has_excluded_suffix(title: &str, span: MatchSpan) -> bool {
    let trailing = title[span.end..].trim().to_lowercase();
    EXCLUDED_SUFFIXES.iter().any(|suffix| trailing.starts_with(suffix.as_str()))
}
