//! Submission qualification pipeline.
//!
//! A candidate runs through a fixed sequence of eligibility checks; the
//! first failing check decides the rejection reason and later checks never
//! execute. This stays a flat early-return chain because the rejection
//! vocabulary depends on the exact tie-break order.

use std::collections::{HashMap, HashSet};

use log::error;

use crate::api::{Qualification, QualificationContext, ReplySink};
use crate::data::subreddits;
use crate::engine::{self, seconds_from_timestamp};
use crate::reply::ReplyTemplate;
use crate::video::{add_timestamp_to_youtube_url, is_youtube_url_without_timestamp};

/// Runs candidates through the eligibility checks and, when one qualifies,
/// posts the corrected-link reply through the supplied sink.
#[derive(Debug, Clone)]
pub struct Qualifier {
    blacklist: HashSet<String>,
    min_karma: HashMap<String, i64>,
    username: String,
    template: ReplyTemplate,
}

impl Qualifier {
    /// Qualifier with explicit policy tables. Both tables are keyed by
    /// lowercase subreddit name; `username` is the account the replies are
    /// posted under (used by the duplicate-reply guard).
    pub fn new(
        blacklist: HashSet<String>,
        min_karma: HashMap<String, i64>,
        username: impl Into<String>,
        template: ReplyTemplate,
    ) -> Self {
        Self { blacklist, min_karma, username: username.into(), template }
    }

    /// Decide whether to act on `ctx` and, if it qualifies, reply through
    /// `sink`. Never aborts on a malformed candidate: parse and platform
    /// failures are logged and become silent rejections.
    pub fn qualify(&self, ctx: &QualificationContext, sink: &mut dyn ReplySink) -> Qualification {
        let subreddit = ctx.submission.subreddit.to_lowercase();
        if self.blacklist.contains(&subreddit) {
            return Qualification::rejected("subreddit in blacklist");
        }
        if ctx.submission.user_is_banned {
            return Qualification::rejected("user is banned");
        }
        let min_karma = self.min_karma.get(&subreddit).copied().unwrap_or(0);
        if min_karma > ctx.comment_karma {
            return Qualification::rejected(format!(
                "need {min_karma} karma to post in {subreddit}, only have {}",
                ctx.comment_karma
            ));
        }
        if !is_youtube_url_without_timestamp(&ctx.submission.url) {
            return Qualification::silent();
        }
        let recognized = match engine::recognize(&ctx.submission.title) {
            Ok(recognized) => recognized,
            Err(err) => {
                error!("Failed to parse reddit title {}. Error:\n{err}", ctx.submission.title);
                return Qualification::silent();
            }
        };
        let Some(timestamp) = recognized else {
            return Qualification::rejected("no timestamp in reddit title");
        };
        let title_time = match seconds_from_timestamp(&timestamp.raw) {
            Ok(seconds) => seconds as i64,
            Err(err) => {
                error!("Failed to parse reddit title {}. Error:\n{err}", ctx.submission.title);
                return Qualification::silent();
            }
        };
        // 3 second buffer for human error when putting the video length in
        // the title.
        let yt_time = i64::from(ctx.video.length_seconds) - 3;
        if title_time >= yt_time {
            return Qualification::rejected(format!("timestamp {title_time} at or beyond yt bounds {yt_time}"));
        }
        if ctx.video.title.contains(&timestamp.raw) {
            return Qualification::rejected("timestamp in youtube title");
        }
        if ctx.reply_authors.iter().any(|author| author == &self.username) {
            return Qualification::rejected("already commented");
        }
        let corrected_url = match add_timestamp_to_youtube_url(&ctx.submission.url, &timestamp.offset) {
            Ok(url) => url,
            Err(err) => {
                error!("Failed to build corrected url from {}. Error:\n{err}", ctx.submission.url);
                return Qualification::silent();
            }
        };
        let comment = self.template.render(&corrected_url);
        if let Err(err) = sink.reply(&comment) {
            error!("Failed to reply to {}. Error:\n{err}", ctx.submission.url);
            return Qualification::silent();
        }
        Qualification { commented: true, reason: format!("!!got one!! comment: {comment}") }
    }
}

impl Default for Qualifier {
    /// Qualifier with the bundled posting-policy tables.
    fn default() -> Self {
        Self::new(
            subreddits::BLACKLIST.iter().map(|name| (*name).to_string()).collect(),
            subreddits::MIN_KARMA.iter().map(|(name, karma)| ((*name).to_string(), *karma)).collect(),
            "YouTubeTimestampBot",
            ReplyTemplate::default(),
        )
    }
}

impl Qualification {
    fn rejected(reason: impl Into<String>) -> Self {
        Self { commented: false, reason: reason.into() }
    }

    fn silent() -> Self {
        Self::rejected("")
    }
}
