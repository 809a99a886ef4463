use regex::Regex;

use super::{BOUNDARY_END, BOUNDARY_START, alternation};
use crate::conjugation::Conjugator;
use crate::error::LexiconError;
use crate::phrase::PhraseTemplate;

/// Recognizes a light-verb construction: any form of any of its verbs,
/// followed by the noun phrase with optional tokens present or absent.
#[derive(Debug, Clone)]
pub struct LightVerbMatcher {
    loanword: String,
    template: PhraseTemplate,
    verb_forms: Vec<String>,
    regex: Regex,
}

/// Parse `template`, conjugate its verbs, and compile the phrase matcher.
pub fn compile_light_verb_phrase(
    loanword: &str,
    template: &str,
    conjugator: &Conjugator,
) -> Result<LightVerbMatcher, LexiconError> {
    let parsed =
        PhraseTemplate::parse(template).map_err(|source| LexiconError::MalformedTemplate {
            template: template.to_string(),
            source,
        })?;

    let mut verb_forms: Vec<String> = Vec::new();
    for verb in parsed.verbs() {
        let conjugation = conjugator.conjugate(verb)?;
        if conjugation.is_empty() {
            return Err(LexiconError::NoValidForms { verb: verb.clone() });
        }
        for form in conjugation.surface_forms() {
            if !verb_forms.contains(&form) {
                verb_forms.push(form);
            }
        }
    }

    let pattern = format!(
        "(?i){}(?P<phrase>{}{}){}",
        BOUNDARY_START,
        alternation(verb_forms.iter().map(String::as_str)),
        parsed.noun_phrase_pattern(),
        BOUNDARY_END
    );
    let regex = Regex::new(&pattern)?;

    Ok(LightVerbMatcher {
        loanword: loanword.to_string(),
        template: parsed,
        verb_forms,
        regex,
    })
}

impl LightVerbMatcher {
    pub fn loanword(&self) -> &str {
        &self.loanword
    }

    pub fn template(&self) -> &PhraseTemplate {
        &self.template
    }

    /// Distinct conjugated forms of all the template's verbs.
    pub fn verb_forms(&self) -> &[String] {
        &self.verb_forms
    }

    /// Every phrase this matcher accepts.
    pub fn surface_phrases(&self) -> Vec<String> {
        self.template.expand(&self.verb_forms)
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
            .and_then(|caps| caps.name("phrase"))
            .map(|m| m.as_str())
    }
}
