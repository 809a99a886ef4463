pub mod cli;
pub mod conjugation;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod phrase;
pub mod scanner;

pub use conjugation::{AmbiguousVerbTable, Conjugation, Conjugator};
pub use error::{ConjugationError, EntryError, LexiconError, TemplateError};
pub use lexicon::{CompileReport, LexicalEntry, compile_lexicon, load_lexicon};
pub use matcher::{LoanwordMatcher, LoanwordType, compile_integrated_verb, compile_light_verb_phrase};
pub use models::{ExtraData, Header, Output, PostMatch};
pub use phrase::PhraseTemplate;
pub use scanner::{ScanResult, count, process};
