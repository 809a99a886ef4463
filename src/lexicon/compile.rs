//! Batch compilation of lexical entries into matchers.

use log::{info, warn};
use rayon::prelude::*;

use super::LexicalEntry;
use crate::conjugation::Conjugator;
use crate::error::EntryError;
use crate::matcher::{LoanwordMatcher, compile_integrated_verb, compile_light_verb_phrase};

/// Matchers for every entry that compiled, and an error for every one that
/// did not. A bad entry never prevents the others from compiling.
#[derive(Debug, Default)]
pub struct CompileReport {
    pub matchers: Vec<LoanwordMatcher>,
    pub errors: Vec<EntryError>,
}

impl CompileReport {
    pub fn integrated(&self) -> impl Iterator<Item = &LoanwordMatcher> {
        self.matchers
            .iter()
            .filter(|m| matches!(m, LoanwordMatcher::Integrated(_)))
    }

    pub fn light_verb(&self) -> impl Iterator<Item = &LoanwordMatcher> {
        self.matchers
            .iter()
            .filter(|m| matches!(m, LoanwordMatcher::LightVerb(_)))
    }

    /// Loanwords that produced at least one error.
    pub fn failed_loanwords(&self) -> Vec<&str> {
        let mut loanwords: Vec<&str> = self.errors.iter().map(|e| e.loanword.as_str()).collect();
        loanwords.dedup();
        loanwords
    }
}

/// Compile the integrated-verb and light-verb matchers of one entry.
///
/// An entry with both columns yields up to two matchers; each column fails
/// independently.
pub fn compile_entry(
    entry: &LexicalEntry,
    conjugator: &Conjugator,
) -> (Vec<LoanwordMatcher>, Vec<EntryError>) {
    let mut matchers = Vec::new();
    let mut errors = Vec::new();

    if let Some(verbs) = &entry.integrated_verb {
        match compile_integrated_verb(&entry.loanword, verbs, conjugator) {
            Ok(m) => matchers.push(LoanwordMatcher::Integrated(m)),
            Err(e) => errors.push(EntryError::new(&entry.loanword, e)),
        }
    }

    if let Some(template) = &entry.light_verb {
        match compile_light_verb_phrase(&entry.loanword, template, conjugator) {
            Ok(m) => matchers.push(LoanwordMatcher::LightVerb(m)),
            Err(e) => errors.push(EntryError::new(&entry.loanword, e)),
        }
    }

    (matchers, errors)
}

/// Compile all entries in parallel. Output order follows input order.
pub fn compile_lexicon(entries: &[LexicalEntry], conjugator: &Conjugator) -> CompileReport {
    let compiled: Vec<_> = entries
        .par_iter()
        .map(|entry| compile_entry(entry, conjugator))
        .collect();

    let mut report = CompileReport::default();
    for (matchers, errors) in compiled {
        report.matchers.extend(matchers);
        report.errors.extend(errors);
    }

    for error in &report.errors {
        warn!("Skipping lexical entry {}", error);
    }
    info!(
        "Compiled {} matchers from {} entries ({} errors)",
        report.matchers.len(),
        entries.len(),
        report.errors.len()
    );
    report
}
