//! Read the loanword resource TSV.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{EntryError, LexiconError};

/// One loanword with its integrated verb and/or light-verb template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub loanword: String,
    /// Pipe-separated infinitives, reflexive clitic removed.
    pub integrated_verb: Option<String>,
    /// Light-verb template, e.g. `hacer|dar (un) tweet`.
    pub light_verb: Option<String>,
}

/// Entries plus the rows that could not become entries.
#[derive(Debug, Default)]
pub struct LexiconLoad {
    pub entries: Vec<LexicalEntry>,
    pub errors: Vec<EntryError>,
}

#[derive(Debug, Deserialize)]
struct LexiconRow {
    #[serde(default)]
    loanword: Option<String>,
    #[serde(default, rename = "integrated verb")]
    integrated_verb: Option<String>,
    #[serde(default, rename = "light verb")]
    light_verb: Option<String>,
}

fn clean_cell(cell: Option<String>) -> Option<String> {
    cell.map(|c| c.trim().to_lowercase()).filter(|c| !c.is_empty())
}

/// Remove a trailing reflexive clitic: `tuitearse` → `tuitear`.
pub fn strip_reflexive(verb: &str) -> &str {
    for ending in ["arse", "erse", "irse"] {
        if verb.ends_with(ending) {
            return &verb[..verb.len() - 2];
        }
    }
    verb
}

fn normalize_integrated(cell: &str) -> String {
    cell.split('|')
        .map(|v| strip_reflexive(v.trim()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Load a lexicon from a tab-separated file with a `loanword` column and
/// optional `integrated verb` / `light verb` columns.
///
/// Structural problems (unreadable file, bad header) are returned as errors.
/// Row-level problems are collected in [`LexiconLoad::errors`] and the row is
/// skipped; the first row of a repeated loanword wins.
pub fn load_lexicon(path: &Path) -> Result<LexiconLoad> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("Failed to open lexicon {:?}", path))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read lexicon header {:?}", path))?;
    if !headers.iter().any(|h| h == "loanword") {
        anyhow::bail!("Lexicon {:?} has no 'loanword' column", path);
    }

    let mut load = LexiconLoad::default();
    let mut first_rows: HashMap<String, usize> = HashMap::new();

    for (idx, row) in reader.deserialize::<LexiconRow>().enumerate() {
        // header is row 1
        let row_number = idx + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping unreadable lexicon row {}: {}", row_number, e);
                load.errors.push(EntryError::new(
                    format!("row {}", row_number),
                    LexiconError::UnreadableRow {
                        row: row_number,
                        message: e.to_string(),
                    },
                ));
                continue;
            }
        };

        let Some(loanword) = clean_cell(row.loanword) else {
            load.errors.push(EntryError::new(
                format!("row {}", row_number),
                LexiconError::MissingLoanword { row: row_number },
            ));
            continue;
        };

        if let Some(&first_row) = first_rows.get(&loanword) {
            load.errors.push(EntryError::new(
                loanword,
                LexiconError::DuplicateLoanword { first_row },
            ));
            continue;
        }

        let integrated_verb = clean_cell(row.integrated_verb).map(|v| normalize_integrated(&v));
        let light_verb = clean_cell(row.light_verb);
        if integrated_verb.is_none() && light_verb.is_none() {
            load.errors
                .push(EntryError::new(loanword, LexiconError::MissingVerbs));
            continue;
        }

        first_rows.insert(loanword.clone(), row_number);
        load.entries.push(LexicalEntry {
            loanword,
            integrated_verb,
            light_verb,
        });
    }

    info!(
        "Loaded {} lexical entries from {:?} ({} rows rejected)",
        load.entries.len(),
        path,
        load.errors.len()
    );
    Ok(load)
}
