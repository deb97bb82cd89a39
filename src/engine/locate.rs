//! Loose clock-shape locating.

use crate::MatchSpan;

/// Find the leftmost clock-shaped substring sitting on clean boundaries:
/// the match must start at the beginning of the string or after whitespace,
/// and end at the end of the string, before whitespace, or before a period
/// or comma that is itself followed by whitespace.
///
/// The shape is deliberately looser than a time of day (hours up to 29) so a
/// borderline or mistyped value is still located with the correct extent;
/// strict validation narrows it afterwards.
pub(crate) fn locate_clock_time(title: &str) -> Option<MatchSpan> {
    let shape = regex!(r"(?:[0-2]?[0-9]:)?[0-5]?[0-9]:[0-5][0-9]");
    // Non-overlapping iteration cannot skip a viable candidate: any restart
    // inside a failed match is preceded by a digit or ':' and so can never
    // satisfy the left boundary.
    for found in shape.find_iter(title) {
        if starts_on_boundary(title, found.start()) && ends_on_boundary(&title[found.end()..]) {
            return Some(MatchSpan { start: found.start(), end: found.end() });
        }
    }
    None
}

fn starts_on_boundary(title: &str, start: usize) -> bool {
    title[..start].chars().next_back().is_none_or(char::is_whitespace)
}

fn ends_on_boundary(trailing: &str) -> bool {
    let mut chars = trailing.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some('.') | Some(',') => chars.next().is_some_and(char::is_whitespace),
        _ => false,
    }
}
