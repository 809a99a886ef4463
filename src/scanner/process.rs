use crate::matcher::LoanwordMatcher;
use crate::models::PostMatch;
use crate::phrase::collapse_whitespace;
use crate::scanner::ScanResult;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

static CONTROL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r\t]").unwrap());
static REPOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"RT @[a-zA-Z0-9_]+").unwrap());

enum PostOutcome {
    Repost,
    Scanned(Vec<PostMatch>),
}

/// Text as the matchers see it: lowercase, line breaks and tabs turned into
/// spaces, whitespace runs collapsed.
pub fn normalize_text(text: &str) -> String {
    collapse_whitespace(&CONTROL_WHITESPACE.replace_all(text, " ")).to_lowercase()
}

/// Retweets carry someone else's wording and are not counted.
pub fn is_repost(text: &str) -> bool {
    REPOST.is_match(text)
}

fn clean_cell(cell: &str) -> String {
    CONTROL_WHITESPACE.replace_all(cell, "").into_owned()
}

/// Run every matcher over one post. Each loanword is reported at most once,
/// by the first of its matchers that fires.
pub fn scan_post<'m>(
    text: &str,
    matchers: &'m [LoanwordMatcher],
) -> Vec<(&'m LoanwordMatcher, String)> {
    let normalized = normalize_text(text);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();
    for matcher in matchers {
        if seen.contains(matcher.loanword()) {
            continue;
        }
        if let Some(matched) = matcher.find(&normalized) {
            seen.insert(matcher.loanword());
            found.push((matcher, matched.to_string()));
        }
    }
    found
}

/// Scan a tab-separated posts file whose `text_column` holds the post body.
///
/// Unreadable rows are logged, recorded in [`ScanResult::errors`] and
/// skipped. The progress bar advances once per row.
pub fn process<P: AsRef<Path>>(
    path: P,
    matchers: &[LoanwordMatcher],
    text_column: &str,
    progress_bar: Arc<ProgressBar>,
) -> Result<ScanResult> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open posts {:?}", path))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read posts header {:?}", path))?
        .iter()
        .map(str::to_string)
        .collect();
    let text_index = headers
        .iter()
        .position(|h| h == text_column)
        .with_context(|| format!("Posts {:?} have no '{}' column", path, text_column))?;

    let mut errors = Vec::new();
    let mut records: Vec<(usize, StringRecord)> = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 2;
        match record {
            Ok(record) => records.push((row, record)),
            Err(e) => {
                warn!("Skipping unreadable post row {}: {}", row, e);
                errors.push(format!("{}: row {}: {}", path.display(), row, e));
                progress_bar.inc(1);
            }
        }
    }

    let outcomes: Vec<PostOutcome> = records
        .par_iter()
        .map(|(row, record)| {
            let outcome = process_post(*row, record, text_index, matchers);
            progress_bar.inc(1);
            outcome
        })
        .collect();

    let posts_count = records.len();
    let mut reposts_skipped = 0;
    let mut matches = Vec::new();
    for outcome in outcomes {
        match outcome {
            PostOutcome::Repost => reposts_skipped += 1,
            PostOutcome::Scanned(post_matches) => matches.extend(post_matches),
        }
    }

    info!(
        "Scanned {} posts from {:?}: {} matches, {} reposts skipped",
        posts_count,
        path,
        matches.len(),
        reposts_skipped
    );

    Ok(ScanResult {
        headers,
        matches,
        posts_count,
        reposts_skipped,
        errors,
    })
}

fn process_post(
    row: usize,
    record: &StringRecord,
    text_index: usize,
    matchers: &[LoanwordMatcher],
) -> PostOutcome {
    let text = record.get(text_index).unwrap_or_default();
    if is_repost(text) {
        return PostOutcome::Repost;
    }

    let found = scan_post(text, matchers);
    if found.is_empty() {
        return PostOutcome::Scanned(Vec::new());
    }

    let fields: Vec<String> = record.iter().map(clean_cell).collect();
    PostOutcome::Scanned(
        found
            .into_iter()
            .map(|(matcher, matched)| PostMatch {
                loanword: matcher.loanword().to_string(),
                loanword_verb: matched,
                loanword_type: matcher.loanword_type(),
                row,
                fields: fields.clone(),
            })
            .collect(),
    )
}
