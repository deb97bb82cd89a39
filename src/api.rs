//! Public contract of the crate.
//!
//! The two entry points mirror the two halves of the system: [`recognize`]
//! extracts a timestamp from a post title, and [`crate::Qualifier`] runs a
//! full candidate through the ordered eligibility checks.

use thiserror::Error;

use crate::engine::{self, TimestampParseError};

/// A timestamp extracted from a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTimestamp {
    /// Compact unit-suffix offset form, e.g. `"1h22m35s"`.
    pub offset: String,
    /// The exact substring matched in the title, e.g. `"01:22:35"`.
    pub raw: String,
}

/// Extract the first human-intended timestamp from `title`.
///
/// Returns `Ok(None)` when the title carries no recognizable timestamp;
/// arbitrary text never errors. The error variant exists for the conversion
/// routines and is handled by the qualification pipeline.
///
/// # Example
/// ```
/// let found = timecue::recognize("Cool thing at 12:34").unwrap().unwrap();
/// assert_eq!(found.offset, "12m34s");
/// assert_eq!(found.raw, "12:34");
/// ```
pub fn recognize(title: &str) -> Result<Option<TitleTimestamp>, TimestampParseError> {
    engine::recognize(title)
}

/// One candidate post as retrieved from the platform.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Post title; the only recognition input.
    pub title: String,
    /// The post's external link.
    pub url: String,
    /// Subreddit the post was made in.
    pub subreddit: String,
    /// Whether the bot's account is banned from that subreddit.
    pub user_is_banned: bool,
}

/// Already-fetched metadata of the linked video.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    /// The video's own title on the remote platform.
    pub title: String,
    /// Video duration in seconds.
    pub length_seconds: u32,
}

/// Everything the qualification pipeline consumes for one candidate. All
/// fields are resolved by the caller beforehand; qualifying performs no
/// network fetches of its own.
#[derive(Debug, Clone)]
pub struct QualificationContext {
    pub submission: Submission,
    pub video: VideoMetadata,
    /// The bot account's current comment karma.
    pub comment_karma: i64,
    /// Authors of replies already attached to the candidate.
    pub reply_authors: Vec<String>,
}

/// Outcome of qualifying one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualification {
    /// Whether the response action was performed.
    pub commented: bool,
    /// Diagnostic reason suitable for logging and tests. Empty for routine
    /// non-matches (not a video link, parse failure); policy rejections carry
    /// a fixed string; the accepted outcome echoes the posted comment.
    pub reason: String,
}

/// Posting a reply failed on the platform side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reply failed: {0}")]
pub struct ReplyError(pub String);

/// The pipeline's single side-effecting seam: attaching a reply to the
/// candidate. Implemented by the platform layer; tests use recording fakes.
pub trait ReplySink {
    fn reply(&mut self, body: &str) -> Result<(), ReplyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_pairs_offset_with_raw_match() {
        let found = recognize("Alexander Mercouris | 22:30").unwrap().unwrap();
        assert_eq!(found, TitleTimestamp { offset: "22m30s".into(), raw: "22:30".into() });
    }

    #[test]
    fn recognize_never_errors_on_arbitrary_text() {
        for title in ["", "::::", "🎬 cut at [12:34]", "a:b:c:d 1:2:3:4"] {
            assert!(recognize(title).unwrap().is_none(), "title {title:?}");
        }
    }
}
