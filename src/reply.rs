//! Reply comment rendering.

/// Renders the markdown reply attached to a qualifying candidate.
#[derive(Debug, Clone, Default)]
pub struct ReplyTemplate {
    git_repo: String,
}

impl ReplyTemplate {
    /// Template with source/issue links pointing at `git_repo`. An empty
    /// repository leaves only the version in the footer.
    pub fn new(git_repo: impl Into<String>) -> Self {
        Self { git_repo: git_repo.into() }
    }

    fn footer(&self) -> String {
        let version = concat!("version ", env!("CARGO_PKG_VERSION"));
        if self.git_repo.is_empty() {
            version.to_string()
        } else {
            format!("[source]({repo}) | [issues]({repo}/issues) | {version}", repo = self.git_repo)
        }
    }

    /// Full comment body. Lines end with two spaces so markdown renders hard
    /// line breaks.
    pub fn render(&self, corrected_url: &str) -> String {
        format!(
            "Link that starts at the time OP mentioned: {corrected_url}  \n\
             ******************************************  \n\
             I'm a bot, bleep bloop.  \n\
             {footer}\n",
            footer = self.footer()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_source_links() {
        let body = ReplyTemplate::new("https://example.com/timecue").render("http://youtu.be/foo?t=1m2s");
        let expected = format!(
            "Link that starts at the time OP mentioned: http://youtu.be/foo?t=1m2s  \n\
             ******************************************  \n\
             I'm a bot, bleep bloop.  \n\
             [source](https://example.com/timecue) | [issues](https://example.com/timecue/issues) | version {}\n",
            env!("CARGO_PKG_VERSION")
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn renders_a_plain_version_without_a_repo() {
        let body = ReplyTemplate::default().render("http://youtu.be/foo?t=1m2s");
        assert!(body.ends_with(&format!("version {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(!body.contains("[source]"));
    }
}
