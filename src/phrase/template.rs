//! Parser for light-verb templates such as `hacer|dar (un) tweet`.
//!
//! Grammar:
//! - `template := verbs WS noun_phrase`
//! - `verbs := verb ("|" verb)*`
//! - `noun_phrase := token (WS token)*`
//! - `token := "(" alts ")" | alts`, where a parenthesized token is optional
//! - `alts := alt ("|" alt)*`
//!
//! Whitespace runs anywhere in the template count as a single space.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TemplateError;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to one space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// One slot of the noun phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseToken {
    /// Must appear, as any one of the alternatives.
    Required(Vec<String>),
    /// Parenthesized: may be left out entirely.
    Optional(Vec<String>),
}

impl PhraseToken {
    pub fn alternatives(&self) -> &[String] {
        match self {
            Self::Required(alts) | Self::Optional(alts) => alts,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

/// A parsed light-verb construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTemplate {
    source: String,
    verbs: Vec<String>,
    tokens: Vec<PhraseToken>,
}

impl PhraseTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let source = collapse_whitespace(&template.to_lowercase());
        if source.is_empty() {
            return Err(TemplateError::Empty);
        }

        let (verb_segment, noun_segment) = source
            .split_once(' ')
            .ok_or(TemplateError::MissingNounPhrase)?;

        let verbs = parse_verbs(verb_segment)?;
        let tokens = parse_noun_phrase(noun_segment)?;
        if tokens.is_empty() {
            return Err(TemplateError::MissingNounPhrase);
        }
        if tokens.iter().all(PhraseToken::is_optional) {
            return Err(TemplateError::NoRequiredToken);
        }

        Ok(Self {
            source,
            verbs,
            tokens,
        })
    }

    /// The normalized template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    pub fn tokens(&self) -> &[PhraseToken] {
        &self.tokens
    }

    /// Alternatives of the last required token, i.e. the loanword noun(s).
    pub fn nouns(&self) -> &[String] {
        self.tokens
            .iter()
            .rev()
            .find(|t| !t.is_optional())
            .map(PhraseToken::alternatives)
            .unwrap_or_default()
    }

    /// Every realization of the noun phrase, optional tokens included and
    /// omitted, with whitespace collapsed.
    pub fn noun_phrases(&self) -> Vec<String> {
        let mut phrases = vec![String::new()];
        for token in &self.tokens {
            let mut options: Vec<&str> = token.alternatives().iter().map(String::as_str).collect();
            if token.is_optional() {
                options.insert(0, "");
            }
            phrases = phrases
                .iter()
                .flat_map(|prefix| options.iter().map(move |option| format!("{} {}", prefix, option)))
                .collect();
        }
        dedup(phrases.iter().map(|p| collapse_whitespace(p)))
    }

    /// Cross product of `verb_forms` with every noun-phrase realization.
    pub fn expand(&self, verb_forms: &[String]) -> Vec<String> {
        let noun_phrases = self.noun_phrases();
        dedup(verb_forms.iter().flat_map(|verb| {
            noun_phrases
                .iter()
                .map(move |np| collapse_whitespace(&format!("{} {}", verb, np)))
        }))
    }

    /// Realizations with the verb left uninflected and tagged, as used for
    /// n-gram corpus queries: `hacer_INF un tweet`.
    pub fn infinitive_phrases(&self) -> Vec<String> {
        let tagged: Vec<String> = self.verbs.iter().map(|v| format!("{}_INF", v)).collect();
        self.expand(&tagged)
    }

    /// Regex source for everything after the verb, each token preceded by
    /// one space; optional tokens carry their space inside the group.
    pub(crate) fn noun_phrase_pattern(&self) -> String {
        self.tokens
            .iter()
            .map(|token| {
                let alts = crate::matcher::alternation(token.alternatives().iter().map(String::as_str));
                if token.is_optional() {
                    format!("(?: {})?", alts)
                } else {
                    format!(" {}", alts)
                }
            })
            .collect()
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

fn parse_verbs(segment: &str) -> Result<Vec<String>, TemplateError> {
    let verbs = split_alternatives(segment)?;
    if let Some(bad) = verbs.iter().find(|v| !v.chars().all(char::is_alphabetic)) {
        return Err(TemplateError::InvalidVerb { verb: bad.clone() });
    }
    Ok(verbs)
}

fn parse_noun_phrase(segment: &str) -> Result<Vec<PhraseToken>, TemplateError> {
    let unbalanced = || TemplateError::UnbalancedParenthesis {
        segment: segment.to_string(),
    };

    let mut tokens = Vec::new();
    let mut rest = segment.trim_start();
    while !rest.is_empty() {
        if let Some(after_open) = rest.strip_prefix('(') {
            let close = after_open.find(')').ok_or_else(unbalanced)?;
            let inner = &after_open[..close];
            if inner.contains('(') {
                return Err(unbalanced());
            }
            tokens.push(PhraseToken::Optional(split_alternatives(inner)?));
            rest = &after_open[close + 1..];
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '(')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            if word.contains(')') {
                return Err(unbalanced());
            }
            tokens.push(PhraseToken::Required(split_alternatives(word)?));
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }
    Ok(tokens)
}

fn split_alternatives(segment: &str) -> Result<Vec<String>, TemplateError> {
    let alternatives: Vec<String> = segment.split('|').map(collapse_whitespace).collect();
    if alternatives.iter().any(String::is_empty) {
        return Err(TemplateError::EmptyAlternative {
            segment: segment.to_string(),
        });
    }
    Ok(dedup(alternatives.into_iter()))
}

