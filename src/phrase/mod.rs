//! Light-verb phrase templates.
//!
//! A template like `hacer|dar (un) tweet` is parsed once into a
//! [`PhraseTemplate`]; matchers and exports work from the parsed form.

mod template;

pub use template::{PhraseTemplate, PhraseToken};

pub(crate) use template::collapse_whitespace;
