use clap::{Parser, Subcommand};

use crate::export::{DEFAULT_CHUNK_SIZE, DEFAULT_QUERY_FIELD, DEFAULT_QUERY_LANG};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TSV of verbs whose forms collide with nouns (columns: verb, forms).
    /// Replaces the built-in table.
    #[arg(long, global = true)]
    pub ambiguous_verbs: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile the lexicon and write one regex per matcher
    Compile {
        /// Loanword lexicon TSV
        lexicon: String,

        /// Output file path
        #[arg(short, default_value = "patterns.tsv")]
        output_file: String,
    },

    /// Write every conjugated form and light-verb phrase, one per line
    Forms {
        /// Loanword lexicon TSV
        lexicon: String,

        /// Output file path
        #[arg(short, default_value = "forms.txt")]
        output_file: String,

        /// Emit infinitives, and light-verb phrases as VERB_INF phrases
        #[arg(long)]
        infinitive_only: bool,
    },

    /// Write boolean search queries as JSON lines
    Queries {
        /// Loanword lexicon TSV
        lexicon: String,

        /// Output file path
        #[arg(short, default_value = "queries.jsonl")]
        output_file: String,

        /// Document field the terms must match
        #[arg(long, default_value = DEFAULT_QUERY_FIELD)]
        field: String,

        /// Required value of the `lang` field
        #[arg(long, default_value = DEFAULT_QUERY_LANG)]
        lang: String,

        /// Maximum search terms per query
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Scan a TSV of posts and write the posts that use a loanword verb
    Scan {
        /// Loanword lexicon TSV
        lexicon: String,

        /// Posts TSV with a header row
        posts: String,

        /// Output file path
        #[arg(short, default_value = "matches.tsv")]
        output_file: String,

        /// Column holding the post text (`text` for tweets, `body` for Reddit)
        #[arg(long, default_value = "text")]
        text_column: String,

        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_defaults() {
        let cli = Cli::parse_from(["loanverb", "scan", "lexicon.tsv", "posts.tsv"]);
        assert!(cli.ambiguous_verbs.is_none());
        match cli.command {
            Commands::Scan {
                lexicon,
                posts,
                output_file,
                text_column,
                report,
            } => {
                assert_eq!(lexicon, "lexicon.tsv");
                assert_eq!(posts, "posts.tsv");
                assert_eq!(output_file, "matches.tsv");
                assert_eq!(text_column, "text");
                assert!(report.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_queries_options() {
        let cli = Cli::parse_from([
            "loanverb",
            "queries",
            "lexicon.tsv",
            "--chunk-size",
            "50",
            "--field",
            "body",
            "--ambiguous-verbs",
            "ambiguous.tsv",
        ]);
        assert_eq!(cli.ambiguous_verbs.as_deref(), Some("ambiguous.tsv"));
        match cli.command {
            Commands::Queries {
                field,
                lang,
                chunk_size,
                ..
            } => {
                assert_eq!(field, "body");
                assert_eq!(lang, "es");
                assert_eq!(chunk_size, 50);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_forms_infinitive_only() {
        let cli = Cli::parse_from(["loanverb", "forms", "lexicon.tsv", "--infinitive-only", "-o", "inf.txt"]);
        match cli.command {
            Commands::Forms {
                output_file,
                infinitive_only,
                ..
            } => {
                assert_eq!(output_file, "inf.txt");
                assert!(infinitive_only);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
