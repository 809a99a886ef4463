//! Grammatical categories and tagged verb forms.

use serde::Serialize;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Preterite,
    Present,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// Index into a six-slot paradigm row: 1sg, 2sg, 3sg, 1pl, 2pl, 3pl.
pub(crate) fn slot(person: Person, number: Number) -> usize {
    let p = match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    };
    match number {
        Number::Singular => p,
        Number::Plural => p + 3,
    }
}

/// What produced a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VerbCategory {
    Infinitive,
    Finite {
        tense: Tense,
        person: Person,
        number: Number,
    },
}

impl std::fmt::Display for VerbCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infinitive => write!(f, "infinitive"),
            Self::Finite {
                tense,
                person,
                number,
            } => write!(f, "{} {} {}", tense, person, number),
        }
    }
}

/// One inflected surface string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VerbForm {
    pub surface: String,
    pub category: VerbCategory,
}
