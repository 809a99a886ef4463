use crate::matcher::LoanwordType;

/// A post in which a loanword matcher fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMatch {
    pub loanword: String,
    /// The matched verb form or light-verb phrase, as it appears in the
    /// normalized text.
    pub loanword_verb: String,
    pub loanword_type: LoanwordType,
    /// Record number in the input file, the header being row 1.
    pub row: usize,
    /// The post's original cells, with control whitespace removed.
    pub fields: Vec<String>,
}
