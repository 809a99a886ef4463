//! Error types for conjugation, template parsing, and lexicon compilation.
//!
//! Domain failures are typed so callers can tell an unconjugable verb apart
//! from a verb whose forms were all filtered, and a malformed template apart
//! from both. Per-entry failures are collected rather than propagated; see
//! [`crate::lexicon::CompileReport`].

use thiserror::Error;

/// The conjugation engine could not produce a paradigm for a verb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    #[error("unconjugable verb '{verb}': {reason}")]
    Unconjugable { verb: String, reason: String },
}

impl ConjugationError {
    pub(crate) fn unconjugable(verb: &str, reason: impl Into<String>) -> Self {
        Self::Unconjugable {
            verb: verb.to_string(),
            reason: reason.into(),
        }
    }
}

/// A light-verb template that does not follow `verb|verb (opt) noun|noun`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Blank template
    #[error("template is empty")]
    Empty,

    /// Only a verb segment, nothing to match after it
    #[error("template has no noun phrase after the verb segment")]
    MissingNounPhrase,

    /// A `|` with nothing on one side, or `()`
    #[error("empty alternative in segment '{segment}'")]
    EmptyAlternative { segment: String },

    /// `(` without `)` or the reverse
    #[error("unbalanced parenthesis in '{segment}'")]
    UnbalancedParenthesis { segment: String },

    /// Every noun-phrase token is optional
    #[error("noun phrase has no required token")]
    NoRequiredToken,

    /// Verb alternative containing anything but letters
    #[error("invalid verb alternative '{verb}'")]
    InvalidVerb { verb: String },
}

/// Failure to turn one lexical entry into a matcher.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("malformed light-verb template '{template}': {source}")]
    MalformedTemplate {
        template: String,
        #[source]
        source: TemplateError,
    },

    #[error(transparent)]
    UnconjugableVerb(#[from] ConjugationError),

    #[error("verb '{verb}' has no valid forms after ambiguous-form filtering")]
    NoValidForms { verb: String },

    #[error("entry has neither an integrated verb nor a light verb")]
    MissingVerbs,

    #[error("row {row} has no loanword")]
    MissingLoanword { row: usize },

    #[error("row {row} could not be read: {message}")]
    UnreadableRow { row: usize, message: String },

    #[error("duplicate loanword (first defined on row {first_row})")]
    DuplicateLoanword { first_row: usize },

    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A [`LexiconError`] tied to the loanword (or row) it came from.
#[derive(Debug, Error)]
#[error("{loanword}: {error}")]
pub struct EntryError {
    pub loanword: String,
    #[source]
    pub error: LexiconError,
}

impl EntryError {
    pub fn new(loanword: impl Into<String>, error: LexiconError) -> Self {
        Self {
            loanword: loanword.into(),
            error,
        }
    }
}
