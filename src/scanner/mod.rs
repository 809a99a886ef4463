//! Run compiled matchers over a TSV of social-media posts.

mod count;
mod process;

use crate::matcher::LoanwordMatcher;
use crate::models::{LoanwordSummary, PostMatch};

pub struct ScanResult {
    /// Column names of the posts file.
    pub headers: Vec<String>,
    pub matches: Vec<PostMatch>,
    pub posts_count: usize,
    pub reposts_skipped: usize,
    pub errors: Vec<String>,
}

impl ScanResult {
    /// Match count per matcher, in matcher order, including matchers that
    /// never fired.
    pub fn summarize(&self, matchers: &[LoanwordMatcher]) -> Vec<LoanwordSummary> {
        matchers
            .iter()
            .map(|matcher| LoanwordSummary {
                loanword: matcher.loanword().to_string(),
                loanword_type: matcher.loanword_type(),
                matches: self
                    .matches
                    .iter()
                    .filter(|m| {
                        m.loanword == matcher.loanword()
                            && m.loanword_type == matcher.loanword_type()
                    })
                    .count(),
            })
            .collect()
    }
}

pub use self::count::count;
pub use self::process::{is_repost, normalize_text, process, scan_post};
