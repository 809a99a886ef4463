//! Boundary-anchored matchers for loanword verbs.
//!
//! Every matcher requires its match to start at the beginning of the text or
//! after whitespace, punctuation or a symbol, and to end likewise, so a form
//! never matches inside a longer word ("tuiteo" does not match in
//! "retuiteo"). Matchers are built per lexical entry and owned by the caller.

mod integrated;
mod light_verb;


use serde::Serialize;
use std::collections::HashSet;
use strum::Display;

pub use integrated::{IntegratedVerbMatcher, compile_integrated_verb};
pub use light_verb::{LightVerbMatcher, compile_light_verb_phrase};

pub(crate) const BOUNDARY_START: &str = r"(?:^|[\s\p{P}\p{S}])";
pub(crate) const BOUNDARY_END: &str = r"(?:$|[\s\p{P}\p{S}])";

/// Which construction a matcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LoanwordType {
    IntegratedLoanword,
    LightVerbLoanword,
}

/// Non-capturing alternation of escaped literals, longest first so the
/// reported match is the most specific one.
pub(crate) fn alternation<'a>(alternatives: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    let mut alts: Vec<&str> = alternatives
        .into_iter()
        .filter(|alt| seen.insert(*alt))
        .collect();
    alts.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    let escaped: Vec<String> = alts.into_iter().map(regex::escape).collect();
    format!("(?:{})", escaped.join("|"))
}

/// A compiled matcher for one lexical entry.
#[derive(Debug, Clone)]
pub enum LoanwordMatcher {
    Integrated(IntegratedVerbMatcher),
    LightVerb(LightVerbMatcher),
}

impl LoanwordMatcher {
    pub fn loanword(&self) -> &str {
        match self {
            Self::Integrated(m) => m.loanword(),
            Self::LightVerb(m) => m.loanword(),
        }
    }

    pub fn loanword_type(&self) -> LoanwordType {
        match self {
            Self::Integrated(_) => LoanwordType::IntegratedLoanword,
            Self::LightVerb(_) => LoanwordType::LightVerbLoanword,
        }
    }

    /// Source of the compiled regex.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Integrated(m) => m.pattern(),
            Self::LightVerb(m) => m.pattern(),
        }
    }

    /// First match in `text`, without the surrounding boundary characters.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        match self {
            Self::Integrated(m) => m.find(text),
            Self::LightVerb(m) => m.find(text),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Integrated(m) => m.is_match(text),
            Self::LightVerb(m) => m.is_match(text),
        }
    }

    /// Every surface string this matcher was built to recognize.
    pub fn surface_forms(&self) -> Vec<String> {
        match self {
            Self::Integrated(m) => m.forms().to_vec(),
            Self::LightVerb(m) => m.surface_phrases(),
        }
    }

    /// Terms to prefilter posts with in a full-text search engine: verb
    /// forms for integrated verbs, nouns for light-verb constructions.
    pub fn search_terms(&self) -> Vec<String> {
        match self {
            Self::Integrated(m) => m.forms().to_vec(),
            Self::LightVerb(m) => m.template().nouns().to_vec(),
        }
    }
}
