//! YouTube link handling.

use url::Url;

/// True if `url` points at YouTube and does not already carry a `t=`
/// timestamp parameter.
pub fn is_youtube_url_without_timestamp(url: &str) -> bool {
    let youtube = regex!(r"((?:https?:)?//)?((?:www|m)\.)?(youtube\.com|youtu\.be)");
    if !youtube.is_match(url) {
        return false;
    }
    // ?t= or &t= means the link already starts at a chosen time.
    !["?t=", "&t="].iter().any(|marker| url.contains(marker))
}

/// Append the compact offset as a `t=` query parameter.
pub fn add_timestamp_to_youtube_url(url: &str, offset: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(url)?;
    parsed.query_pairs_mut().append_pair("t", offset);
    Ok(parsed.to_string())
}
