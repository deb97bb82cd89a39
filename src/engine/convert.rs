//! Strict clock validation and timestamp conversion.

use thiserror::Error;

/// A clock-formatted string could not be interpreted as a timestamp.
///
/// Carries the literal failing value so callers can log what they saw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unparsable timestamp '{0}'")]
pub struct TimestampParseError(pub String);

/// Split a clock-formatted string into integer components, most significant
/// first. At most three components (hours, minutes, seconds) are accepted.
pub(crate) fn clock_components(timestamp: &str) -> Result<Vec<u32>, TimestampParseError> {
    let parts: Vec<&str> = timestamp.split(':').collect();
    if parts.len() > 3 {
        return Err(TimestampParseError(timestamp.to_string()));
    }
    parts
        .iter()
        .map(|part| part.parse::<u32>().map_err(|_| TimestampParseError(timestamp.to_string())))
        .collect()
}

/// Calendar bound for each component position, least significant first.
const COMPONENT_MAX: [u32; 3] = [59, 59, 23];

/// True if every component fits a real time of day: seconds and minutes up
/// to 59, hours up to 23. Narrower than the locator's shape on purpose.
pub(crate) fn within_clock_bounds(components: &[u32]) -> bool {
    components.iter().rev().zip(COMPONENT_MAX).all(|(&value, max)| value <= max)
}

/// Total elapsed seconds via positional base-60 weighting.
pub(crate) fn total_seconds(components: &[u32]) -> u64 {
    components.iter().rev().enumerate().map(|(position, &value)| u64::from(value) * 60u64.pow(position as u32)).sum()
}

/// Render components in the compact unit-suffix offset form (`1h22m35s`).
///
/// Integer parsing upstream already stripped non-structural leading zeros;
/// an explicitly present zero component keeps its unit (`00:12` -> `0m12s`).
pub(crate) fn offset_from_components(components: &[u32]) -> String {
    const UNITS: [&str; 3] = ["s", "m", "h"];
    let mut parts: Vec<String> =
        components.iter().rev().zip(UNITS).map(|(value, unit)| format!("{value}{unit}")).collect();
    parts.reverse();
    parts.concat()
}

/// Convert a clock-formatted timestamp to the compact offset form,
/// e.g. `"01:22:35"` -> `"1h22m35s"`.
pub fn offset_from_timestamp(timestamp: &str) -> Result<String, TimestampParseError> {
    Ok(offset_from_components(&clock_components(timestamp)?))
}

/// Convert a clock-formatted timestamp to total elapsed seconds,
/// e.g. `"01:22:35"` -> `4955`.
pub fn seconds_from_timestamp(timestamp: &str) -> Result<u64, TimestampParseError> {
    Ok(total_seconds(&clock_components(timestamp)?))
}
