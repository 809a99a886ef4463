use super::*;
use crate::conjugation::Conjugator;
use crate::error::LexiconError;
use crate::matcher::LoanwordType;
use std::fs;
use tempfile::TempDir;

fn write_lexicon(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("lexicon.tsv");
    fs::write(&path, content).expect("Failed to write lexicon");
    (temp_dir, path)
}

fn entry(loanword: &str, integrated: Option<&str>, light: Option<&str>) -> LexicalEntry {
    LexicalEntry {
        loanword: loanword.to_string(),
        integrated_verb: integrated.map(str::to_string),
        light_verb: light.map(str::to_string),
    }
}

#[test]
fn test_strip_reflexive() {
    assert_eq!(strip_reflexive("tuitearse"), "tuitear");
    assert_eq!(strip_reflexive("meterse"), "meter");
    assert_eq!(strip_reflexive("irse"), "ir");
    assert_eq!(strip_reflexive("tuitear"), "tuitear");
}

#[test]
fn test_load_integrated_only() {
    let (_dir, path) = write_lexicon("loanword\tintegrated verb\ntweet\ttuitear\npost\tPostearse\n");
    let load = load_lexicon(&path).unwrap();
    assert!(load.errors.is_empty());
    assert_eq!(
        load.entries,
        vec![
            entry("tweet", Some("tuitear"), None),
            entry("post", Some("postear"), None),
        ]
    );
}

#[test]
fn test_load_both_columns() {
    let (_dir, path) = write_lexicon(
        "loanword\tintegrated verb\tlight verb\ntweet\ttuitear|twittear\thacer|dar (un) tweet\nbox\t\thacer box|boxing\n",
    );
    let load = load_lexicon(&path).unwrap();
    assert!(load.errors.is_empty());
    assert_eq!(load.entries.len(), 2);
    assert_eq!(
        load.entries[0],
        entry("tweet", Some("tuitear|twittear"), Some("hacer|dar (un) tweet"))
    );
    assert_eq!(load.entries[1], entry("box", None, Some("hacer box|boxing")));
}

#[test]
fn test_load_reports_bad_rows_and_continues() {
    let (_dir, path) = write_lexicon(
        "loanword\tlight verb\ntweet\thacer (un) tweet\n\thacer post\ntweet\tdar tweet\nlike\t\nbox\thacer box\n",
    );
    let load = load_lexicon(&path).unwrap();
    let loanwords: Vec<&str> = load.entries.iter().map(|e| e.loanword.as_str()).collect();
    assert_eq!(loanwords, vec!["tweet", "box"]);

    assert_eq!(load.errors.len(), 3);
    assert!(matches!(
        load.errors[0].error,
        LexiconError::MissingLoanword { row: 3 }
    ));
    assert_eq!(load.errors[1].loanword, "tweet");
    assert!(matches!(
        load.errors[1].error,
        LexiconError::DuplicateLoanword { first_row: 2 }
    ));
    assert_eq!(load.errors[2].loanword, "like");
    assert!(matches!(load.errors[2].error, LexiconError::MissingVerbs));
}

#[test]
fn test_load_tolerates_padded_headers() {
    let (_dir, path) =
        write_lexicon("loanword \t integrated verb\tlight verb \ntweet\ttuitear\thacer (un) tweet\n");
    let load = load_lexicon(&path).unwrap();
    assert!(load.errors.is_empty(), "Unexpected errors: {:?}", load.errors);
    assert_eq!(
        load.entries,
        vec![entry("tweet", Some("tuitear"), Some("hacer (un) tweet"))]
    );
}

#[test]
fn test_load_requires_loanword_column() {
    let (_dir, path) = write_lexicon("word\tlight verb\ntweet\thacer tweet\n");
    let err = load_lexicon(&path).unwrap_err();
    assert!(err.to_string().contains("loanword"));
}

#[test]
fn test_load_missing_file() {
    let result = load_lexicon(std::path::Path::new("/nonexistent/lexicon.tsv"));
    assert!(result.is_err());
}

#[test]
fn test_compile_entry_with_both_columns() {
    let conjugator = Conjugator::default();
    let (matchers, errors) = compile_entry(
        &entry("tweet", Some("tuitear"), Some("hacer (un) tweet")),
        &conjugator,
    );
    assert!(errors.is_empty());
    let types: Vec<LoanwordType> = matchers.iter().map(|m| m.loanword_type()).collect();
    assert_eq!(
        types,
        vec![LoanwordType::IntegratedLoanword, LoanwordType::LightVerbLoanword]
    );
}

#[test]
fn test_compile_entry_columns_fail_independently() {
    let conjugator = Conjugator::default();
    let (matchers, errors) =
        compile_entry(&entry("tweet", Some("tuitear"), Some("hacer")), &conjugator);
    assert_eq!(matchers.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].error,
        LexiconError::MalformedTemplate { ref template, .. } if template == "hacer"
    ));
}

#[test]
fn test_compile_lexicon_accumulates_errors() {
    let conjugator = Conjugator::default();
    let entries = vec![
        entry("tweet", Some("tuitear"), None),
        entry("post", None, Some("hacer")),
        entry("like", Some("like"), None),
        entry("box", None, Some("hacer box|boxing")),
        entry("story", None, Some("subir (una) story|historia")),
    ];
    let report = compile_lexicon(&entries, &conjugator);

    let compiled: Vec<&str> = report.matchers.iter().map(|m| m.loanword()).collect();
    assert_eq!(compiled, vec!["tweet", "box", "story"]);
    assert_eq!(report.integrated().count(), 1);
    assert_eq!(report.light_verb().count(), 2);

    assert_eq!(report.failed_loanwords(), vec!["post", "like"]);
    assert!(matches!(
        report.errors[0].error,
        LexiconError::MalformedTemplate { .. }
    ));
    assert!(matches!(
        report.errors[1].error,
        LexiconError::UnconjugableVerb(_)
    ));
}
