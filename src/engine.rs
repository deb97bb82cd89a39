//! Timestamp recognition engine.
//!
//! Recognizing a title is a short fixed pipeline:
//!
//! ```text
//! title ── locate                  (locate.rs)
//!            - leftmost loose clock shape, boundary-anchored
//!              │
//!              v
//!          exclusion               (exclude.rs)
//!            - preceding text vs prefix phrase set
//!            - trailing text vs suffix word set
//!              │
//!              v
//!          strict validation       (convert.rs)
//!            - calendar bounds (hours <= 23, minutes/seconds <= 59)
//!            - zero-offset rejection
//!              │
//!              v
//!          convert                 (convert.rs)
//!            - total seconds + compact offset form
//! ```
//!
//! The locate/validate split is deliberate: the locator tolerates hour values
//! up to 29 so a borderline match is still found with the correct extent,
//! while acceptance enforces real time-of-day bounds. Keeping the two phases
//! in separate functions keeps both independently testable.
//!
//! Arbitrary input text never produces an error here: anything that fails a
//! phase is simply "no timestamp". The error path belongs to the conversion
//! routines, which outside callers can feed strings the locator never saw.

#[path = "engine/convert.rs"]
mod convert;
#[path = "engine/exclude.rs"]
mod exclude;
#[path = "engine/locate.rs"]
mod locate;

pub use convert::{TimestampParseError, offset_from_timestamp, seconds_from_timestamp};

use crate::api::TitleTimestamp;
use convert::{clock_components, offset_from_components, total_seconds, within_clock_bounds};
use exclude::{has_excluded_prefix, has_excluded_suffix};
use locate::locate_clock_time;

/// Extract the first human-intended timestamp from a title, if any.
pub(crate) fn recognize(title: &str) -> Result<Option<TitleTimestamp>, TimestampParseError> {
    let Some(span) = locate_clock_time(title) else {
        return Ok(None);
    };
    if has_excluded_prefix(title, span) || has_excluded_suffix(title, span) {
        return Ok(None);
    }
    let raw = &title[span.start..span.end];
    let components = clock_components(raw)?;
    if !within_clock_bounds(&components) {
        return Ok(None);
    }
    if total_seconds(&components) == 0 {
        return Ok(None);
    }
    Ok(Some(TitleTimestamp { offset: offset_from_components(&components), raw: raw.to_string() }))
}

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;
