use regex::Regex;

use super::{BOUNDARY_END, BOUNDARY_START, alternation};
use crate::conjugation::Conjugator;
use crate::error::LexiconError;

/// Recognizes any conjugated form of a loanword's integrated verb(s).
#[derive(Debug, Clone)]
pub struct IntegratedVerbMatcher {
    loanword: String,
    verbs: Vec<String>,
    forms: Vec<String>,
    removed: Vec<String>,
    regex: Regex,
}

/// Conjugate every pipe-separated alternative in `verbs` and compile one
/// alternation that can occur at the start, middle or end of a post.
pub fn compile_integrated_verb(
    loanword: &str,
    verbs: &str,
    conjugator: &Conjugator,
) -> Result<IntegratedVerbMatcher, LexiconError> {
    let verb_list: Vec<String> = verbs
        .split('|')
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
    if verb_list.is_empty() {
        return Err(LexiconError::MissingVerbs);
    }

    let mut forms: Vec<String> = Vec::new();
    let mut removed: Vec<String> = Vec::new();
    for verb in &verb_list {
        let conjugation = conjugator.conjugate(verb)?;
        if conjugation.is_empty() {
            return Err(LexiconError::NoValidForms { verb: verb.clone() });
        }
        for form in conjugation.surface_forms() {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        removed.extend(
            conjugation
                .removed_surface_forms()
                .into_iter()
                .map(str::to_string),
        );
    }

    let pattern = format!(
        "(?i){}(?P<form>{}){}",
        BOUNDARY_START,
        alternation(forms.iter().map(String::as_str)),
        BOUNDARY_END
    );
    let regex = Regex::new(&pattern)?;

    Ok(IntegratedVerbMatcher {
        loanword: loanword.to_string(),
        verbs: verb_list,
        forms,
        removed,
        regex,
    })
}

impl IntegratedVerbMatcher {
    pub fn loanword(&self) -> &str {
        &self.loanword
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    /// Distinct surface forms in generation order.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Forms withheld because they collide with nouns.
    pub fn removed_forms(&self) -> &[String] {
        &self.removed
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.name("form"))
            .map(|m| m.as_str())
    }
}
