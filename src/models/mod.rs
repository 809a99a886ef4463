mod output;
mod post;

pub use output::{ExtraData, Header, LoanwordSummary, OUTPUT_FORMAT_VERSION, Output};
pub use post::PostMatch;
