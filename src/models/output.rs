use serde::Serialize;

use crate::matcher::LoanwordType;

pub const OUTPUT_FORMAT_VERSION: &str = "1.0.0";

/// JSON run report written by `scan --report`.
#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub loanwords: Vec<LoanwordSummary>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub extra_data: ExtraData,
    pub errors: Vec<String>,
    pub output_format_version: String,
}

#[derive(Serialize, Debug, Default)]
pub struct ExtraData {
    pub lexicon_path: String,
    pub posts_path: String,
    pub entries_count: usize,
    pub integrated_matchers_count: usize,
    pub light_verb_matchers_count: usize,
    pub ambiguous_verbs_count: usize,
    pub posts_count: usize,
    pub reposts_skipped: usize,
    pub matches_count: usize,
}

/// Matches found for one compiled matcher.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoanwordSummary {
    pub loanword: String,
    pub loanword_type: LoanwordType,
    pub matches: usize,
}
