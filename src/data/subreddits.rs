//! Operator-curated posting policy defaults.
//!
//! Some large subreddits remove bot comments outright, others auto-remove
//! comments from low-karma accounts. Both tables are lowercase-keyed and can
//! be replaced through `Qualifier::new`.

/// Subreddits never commented in.
pub const BLACKLIST: &[&str] = &["askreddit", "news", "politics", "science", "worldnews"];

/// Minimum comment karma required before commenting in a subreddit.
pub const MIN_KARMA: &[(&str, i64)] = &[("gaming", 500), ("music", 500), ("videos", 1200)];
