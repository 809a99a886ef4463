//! Loanword lexicon: loading the resource TSV and compiling its entries.

mod compile;
mod loader;

#[cfg(test)]
mod lexicon_test;

pub use compile::{CompileReport, compile_entry, compile_lexicon};
pub use loader::{LexicalEntry, LexiconLoad, load_lexicon, strip_reflexive};
