//! Writers for compiled matchers: a pattern table, plain form lists for
//! n-gram corpus lookups, and boolean search-engine queries.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::io::Write;

use crate::matcher::{LoanwordMatcher, LoanwordType};
use crate::models::PostMatch;

pub const DEFAULT_QUERY_FIELD: &str = "text";
pub const DEFAULT_QUERY_LANG: &str = "es";
pub const DEFAULT_CHUNK_SIZE: usize = 100;

#[derive(Serialize)]
struct PatternRow<'a> {
    loanword: &'a str,
    loanword_type: LoanwordType,
    pattern: &'a str,
}

/// Write one `loanword, loanword_type, pattern` row per matcher.
pub fn write_patterns<W: Write>(writer: W, matchers: &[LoanwordMatcher]) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for matcher in matchers {
        writer
            .serialize(PatternRow {
                loanword: matcher.loanword(),
                loanword_type: matcher.loanword_type(),
                pattern: matcher.pattern(),
            })
            .with_context(|| format!("Failed to write pattern for {}", matcher.loanword()))?;
    }
    writer.flush().context("Failed to flush pattern table")?;
    Ok(())
}

/// Write matched posts: `loanword, loanword_verb, loanword_type` followed by
/// the post's own columns.
pub fn write_matches<W: Write>(
    writer: W,
    post_headers: &[String],
    matches: &[PostMatch],
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(writer);

    let mut header = vec!["loanword", "loanword_verb", "loanword_type"];
    header.extend(post_headers.iter().map(String::as_str));
    writer
        .write_record(&header)
        .context("Failed to write match header")?;

    for post_match in matches {
        let loanword_type = post_match.loanword_type.to_string();
        let mut record = vec![
            post_match.loanword.as_str(),
            post_match.loanword_verb.as_str(),
            loanword_type.as_str(),
        ];
        record.extend(post_match.fields.iter().map(String::as_str));
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write match for row {}", post_match.row))?;
    }
    writer.flush().context("Failed to flush matches")?;
    Ok(())
}

/// Surface strings for one matcher. With `infinitive_only`, integrated verbs
/// contribute their infinitives and light verbs their `VERB_INF` phrases.
pub fn matcher_forms(matcher: &LoanwordMatcher, infinitive_only: bool) -> Vec<String> {
    if !infinitive_only {
        return matcher.surface_forms();
    }
    match matcher {
        LoanwordMatcher::Integrated(m) => m.verbs().to_vec(),
        LoanwordMatcher::LightVerb(m) => m.template().infinitive_phrases(),
    }
}

/// Write every form of every matcher, one per line, without repeats.
/// Returns the number of lines written.
pub fn write_forms<W: Write>(
    mut writer: W,
    matchers: &[LoanwordMatcher],
    infinitive_only: bool,
) -> Result<usize> {
    let mut seen = HashSet::new();
    let mut written = 0;
    for matcher in matchers {
        for form in matcher_forms(matcher, infinitive_only) {
            if seen.insert(form.clone()) {
                writeln!(writer, "{}", form).context("Failed to write form list")?;
                written += 1;
            }
        }
    }
    writer.flush().context("Failed to flush form list")?;
    Ok(written)
}

/// Options for [`build_search_queries`].
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub field: String,
    pub lang: String,
    pub chunk_size: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            field: DEFAULT_QUERY_FIELD.to_string(),
            lang: DEFAULT_QUERY_LANG.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// One boolean query per chunk of `terms`: the chunk joined with `|` must
/// match `field`, and `lang` must match the post language.
pub fn build_search_queries(terms: &[String], options: &QueryOptions) -> Vec<Value> {
    let chunk_size = options.chunk_size.max(1);
    terms
        .chunks(chunk_size)
        .map(|chunk| {
            json!({
                "query": {
                    "bool": {
                        "must": [
                            { "match": { (options.field.clone()): chunk.join("|") } },
                            { "match": { "lang": options.lang } }
                        ]
                    }
                }
            })
        })
        .collect()
}

/// Search terms of the given matcher type, deduplicated in matcher order.
pub fn search_terms(matchers: &[LoanwordMatcher], loanword_type: LoanwordType) -> Vec<String> {
    let mut seen = HashSet::new();
    matchers
        .iter()
        .filter(|m| m.loanword_type() == loanword_type)
        .flat_map(LoanwordMatcher::search_terms)
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Write queries as JSON lines, integrated-verb terms first, then
/// light-verb nouns, never mixing the two in one query.
pub fn write_search_queries<W: Write>(
    mut writer: W,
    matchers: &[LoanwordMatcher],
    options: &QueryOptions,
) -> Result<usize> {
    let mut written = 0;
    for loanword_type in [LoanwordType::IntegratedLoanword, LoanwordType::LightVerbLoanword] {
        let terms = search_terms(matchers, loanword_type);
        for query in build_search_queries(&terms, options) {
            let line = serde_json::to_string(&query)?;
            writeln!(writer, "{}", line).context("Failed to write search query")?;
            written += 1;
        }
    }
    writer.flush().context("Failed to flush search queries")?;
    Ok(written)
}
