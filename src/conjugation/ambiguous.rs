//! Verb forms that collide with common nouns.
//!
//! Some integrated verbs have present-tense forms identical to a Spanish noun
//! ("accesar" → "acceso"). Matching those forms in post text would mostly
//! find the noun, so they are dropped from the generated paradigm. The table is
//! curated per observed false positive, not derived from a rule.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Built-in verbs whose "-o" and "-a" present forms double as nouns.
const BUILTIN_AMBIGUOUS_VERBS: &[(&str, &[&str])] = &[
    ("accesar", &["acceso", "accesa"]),
    ("auditar", &["audito", "audita"]),
    ("boxear", &["boxeo", "boxea"]),
    ("chequear", &["chequeo", "chequea"]),
    ("formear", &["formeo", "formea"]),
    ("frizar", &["frizo", "friza"]),
];

/// Lookup from infinitive to the surface forms that must be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousVerbTable {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Default for AmbiguousVerbTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Deserialize)]
struct AmbiguousVerbRow {
    verb: String,
    forms: String,
}

impl AmbiguousVerbTable {
    pub fn builtin() -> Self {
        let entries = BUILTIN_AMBIGUOUS_VERBS
            .iter()
            .map(|(verb, forms)| {
                (
                    verb.to_string(),
                    forms.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// An empty table; nothing is filtered.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Load a replacement table from a TSV with `verb` and `forms` columns,
    /// where `forms` holds pipe-separated surface forms.
    pub fn from_tsv(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open ambiguous verb table {:?}", path))?;

        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (idx, row) in reader.deserialize::<AmbiguousVerbRow>().enumerate() {
            let row = row.with_context(|| {
                format!("Invalid row {} in ambiguous verb table {:?}", idx + 2, path)
            })?;
            let forms = row
                .forms
                .split('|')
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty());
            entries
                .entry(row.verb.trim().to_lowercase())
                .or_default()
                .extend(forms);
        }
        Ok(Self { entries })
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.entries.contains_key(verb)
    }

    /// Colliding forms for `verb`, empty when the verb is not listed.
    pub fn colliding_forms(&self, verb: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(verb)
            .into_iter()
            .flat_map(|forms| forms.iter().map(String::as_str))
    }

    pub fn is_colliding(&self, verb: &str, surface: &str) -> bool {
        self.entries
            .get(verb)
            .is_some_and(|forms| forms.contains(surface))
    }

    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
