//! Spanish verb conjugation.
//!
//! Produces the surface forms needed to find a verb in informal text:
//! {preterite, present, future} × {1st, 2nd, 3rd} × {singular, plural}, plus
//! the infinitive. The engine covers the regular -ar/-er/-ir paradigms with
//! their spelling rules, a stem-change table, and a table of irregular verbs.
//! Forms listed in the [`AmbiguousVerbTable`] are removed afterwards.

mod ambiguous;
mod irregular;
mod paradigm;
mod types;

#[cfg(test)]
mod conjugation_test;

use log::debug;
use std::collections::HashSet;
use strum::IntoEnumIterator;

use crate::error::ConjugationError;

pub use ambiguous::AmbiguousVerbTable;
pub use types::{Number, Person, Tense, VerbCategory, VerbForm};

use irregular::{lookup_irregular, lookup_stem_change};
use paradigm::{Paradigm, future_row, future_stem, is_vowel, regular, split_infinitive};

/// Number of tagged forms for a verb with nothing filtered.
pub const FORMS_PER_VERB: usize = 19;

/// The conjugated forms of one infinitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub infinitive: String,
    /// Tagged forms in tense → person → number order, infinitive last.
    /// Surface strings may repeat (-ar preterite and present 1pl coincide).
    pub forms: Vec<VerbForm>,
    /// Forms dropped by the ambiguous-verb table.
    pub removed: Vec<VerbForm>,
}

impl Conjugation {
    /// Distinct surface strings, in generation order.
    pub fn surface_forms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.forms
            .iter()
            .filter(|form| seen.insert(form.surface.as_str()))
            .map(|form| form.surface.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn removed_surface_forms(&self) -> Vec<&str> {
        self.removed.iter().map(|f| f.surface.as_str()).collect()
    }
}

/// Conjugates infinitives and applies the ambiguous-form filter.
#[derive(Debug, Clone, Default)]
pub struct Conjugator {
    ambiguous: AmbiguousVerbTable,
}

impl Conjugator {
    pub fn new(ambiguous: AmbiguousVerbTable) -> Self {
        Self { ambiguous }
    }

    pub fn ambiguous_verbs(&self) -> &AmbiguousVerbTable {
        &self.ambiguous
    }

    /// Conjugate `verb` (an infinitive without a reflexive clitic).
    ///
    /// Returns [`ConjugationError::Unconjugable`] when no paradigm can be
    /// built. A verb whose forms are all filtered returns an empty
    /// [`Conjugation::forms`] instead, so the two cases stay distinguishable.
    pub fn conjugate(&self, verb: &str) -> Result<Conjugation, ConjugationError> {
        let infinitive = verb.trim().to_lowercase();
        let paradigm = build_paradigm(&infinitive)?;

        let mut forms = Vec::with_capacity(FORMS_PER_VERB);
        for tense in Tense::iter() {
            let row = paradigm.row(tense);
            for person in Person::iter() {
                for number in Number::iter() {
                    let surface = row[types::slot(person, number)].clone();
                    debug!(
                        "conjugating {} x tense={} person={} number={}; conjugated={}",
                        infinitive, tense, person, number, surface
                    );
                    forms.push(VerbForm {
                        surface,
                        category: VerbCategory::Finite {
                            tense,
                            person,
                            number,
                        },
                    });
                }
            }
        }
        forms.push(VerbForm {
            surface: infinitive.clone(),
            category: VerbCategory::Infinitive,
        });

        let (removed, forms): (Vec<VerbForm>, Vec<VerbForm>) = forms
            .into_iter()
            .partition(|form| self.ambiguous.is_colliding(&infinitive, &form.surface));
        if !removed.is_empty() {
            debug!(
                "removed ambiguous forms of {}: {:?}",
                infinitive,
                removed.iter().map(|f| &f.surface).collect::<Vec<_>>()
            );
        }

        Ok(Conjugation {
            infinitive,
            forms,
            removed,
        })
    }
}

fn build_paradigm(infinitive: &str) -> Result<Paradigm, ConjugationError> {
    if infinitive.is_empty() {
        return Err(ConjugationError::unconjugable(infinitive, "empty verb"));
    }
    if !infinitive.chars().all(char::is_alphabetic) {
        return Err(ConjugationError::unconjugable(
            infinitive,
            "contains non-alphabetic characters",
        ));
    }

    if let Some((prefix, irregular)) = lookup_irregular(infinitive) {
        let prefixed = |row: [&str; 6]| row.map(|form| format!("{}{}", prefix, form));
        let regular_row = |tense: Tense| {
            split_infinitive(infinitive)
                .map(|(stem, class)| regular(infinitive, stem, class, None).row(tense).clone())
                .ok_or_else(|| {
                    ConjugationError::unconjugable(infinitive, "no regular fallback for tense")
                })
        };
        let preterite = match irregular.preterite {
            Some(row) => prefixed(row),
            None => regular_row(Tense::Preterite)?,
        };
        let present = match irregular.present {
            Some(row) => prefixed(row),
            None => regular_row(Tense::Present)?,
        };
        let irregular_future = irregular
            .future_stem
            .map_or_else(|| future_stem(infinitive), |stem| format!("{}{}", prefix, stem));
        return Ok(Paradigm {
            preterite,
            present,
            future: future_row(&irregular_future),
        });
    }

    let (stem, class) = split_infinitive(infinitive).ok_or_else(|| {
        ConjugationError::unconjugable(infinitive, "no -ar, -er, -ir or -ír ending")
    })?;
    if !stem.chars().any(is_vowel) {
        return Err(ConjugationError::unconjugable(infinitive, "stem has no vowel"));
    }
    Ok(regular(infinitive, stem, class, lookup_stem_change(infinitive)))
}
