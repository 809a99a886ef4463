use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::info;
use serde_json::to_string_pretty;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use loanverb::cli::{Cli, Commands};
use loanverb::conjugation::{AmbiguousVerbTable, Conjugator};
use loanverb::export::{
    QueryOptions, write_forms, write_matches, write_patterns, write_search_queries,
};
use loanverb::lexicon::{CompileReport, LexiconLoad, compile_lexicon, load_lexicon};
use loanverb::models::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output};
use loanverb::scanner::{ScanResult, count, process};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let multi_progress = init_logging()?;
    let conjugator = init_conjugator(cli.ambiguous_verbs.as_deref())?;

    match cli.command {
        Commands::Compile {
            lexicon,
            output_file,
        } => {
            let (_, report) = load_and_compile(&lexicon, &conjugator)?;
            write_patterns(create_file(&output_file)?, &report.matchers)?;
            println!(
                "{} patterns written to {}",
                report.matchers.len(),
                output_file
            );
        }
        Commands::Forms {
            lexicon,
            output_file,
            infinitive_only,
        } => {
            let (_, report) = load_and_compile(&lexicon, &conjugator)?;
            let written = write_forms(create_file(&output_file)?, &report.matchers, infinitive_only)?;
            println!("{} forms written to {}", written, output_file);
        }
        Commands::Queries {
            lexicon,
            output_file,
            field,
            lang,
            chunk_size,
        } => {
            let (_, report) = load_and_compile(&lexicon, &conjugator)?;
            let options = QueryOptions {
                field,
                lang,
                chunk_size,
            };
            let written =
                write_search_queries(create_file(&output_file)?, &report.matchers, &options)?;
            println!("{} queries written to {}", written, output_file);
        }
        Commands::Scan {
            lexicon,
            posts,
            output_file,
            text_column,
            report: report_file,
        } => {
            let start_time = Utc::now();
            let (load, report) = load_and_compile(&lexicon, &conjugator)?;

            let total_posts = count(&posts)?;
            println!("Found {} posts in {}", total_posts, posts);

            let progress_bar = create_progress_bar(&multi_progress, total_posts);
            let scan_result = process(
                &posts,
                &report.matchers,
                &text_column,
                Arc::clone(&progress_bar),
            )?;
            progress_bar.finish_with_message("Scan complete!");

            write_matches(
                create_file(&output_file)?,
                &scan_result.headers,
                &scan_result.matches,
            )?;
            println!(
                "{} matches written to {}",
                scan_result.matches.len(),
                output_file
            );

            if let Some(report_file) = report_file {
                let end_time = Utc::now();
                let run = ScanRun {
                    lexicon_path: &lexicon,
                    posts_path: &posts,
                    load: &load,
                    report: &report,
                    scan_result: &scan_result,
                    ambiguous_verbs_count: conjugator.ambiguous_verbs().len(),
                };
                let output = create_output(start_time, end_time, &run);
                write_output(&report_file, &output)?;
                println!("JSON report written to {}", report_file);
            }
        }
    }
    Ok(())
}

fn init_logging() -> Result<MultiProgress, log::SetLoggerError> {
    let logger = env_logger::Builder::from_env(Env::default().default_filter_or("info")).build();
    let level = logger.filter();
    let multi_progress = MultiProgress::new();
    LogWrapper::new(multi_progress.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(multi_progress)
}

fn init_conjugator(ambiguous_verbs: Option<&str>) -> anyhow::Result<Conjugator> {
    let table = match ambiguous_verbs {
        Some(path) => AmbiguousVerbTable::from_tsv(Path::new(path))?,
        None => AmbiguousVerbTable::builtin(),
    };
    info!("Filtering noun-colliding forms of {} verbs", table.len());
    Ok(Conjugator::new(table))
}

fn load_and_compile(
    lexicon: &str,
    conjugator: &Conjugator,
) -> anyhow::Result<(LexiconLoad, CompileReport)> {
    let load = load_lexicon(Path::new(lexicon))?;
    let report = compile_lexicon(&load.entries, conjugator);
    Ok((load, report))
}

fn create_file(path: &str) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
    Ok(BufWriter::new(file))
}

fn create_progress_bar(multi_progress: &MultiProgress, total_posts: usize) -> Arc<ProgressBar> {
    let progress_bar = multi_progress.add(ProgressBar::new(total_posts as u64));
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} posts scanned ({eta})")
            .expect("Failed to create progress bar style")
            .progress_chars("#>-"),
    );
    Arc::new(progress_bar)
}

struct ScanRun<'a> {
    lexicon_path: &'a str,
    posts_path: &'a str,
    load: &'a LexiconLoad,
    report: &'a CompileReport,
    scan_result: &'a ScanResult,
    ambiguous_verbs_count: usize,
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    run: &ScanRun,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        lexicon_path: run.lexicon_path.to_string(),
        posts_path: run.posts_path.to_string(),
        entries_count: run.load.entries.len(),
        integrated_matchers_count: run.report.integrated().count(),
        light_verb_matchers_count: run.report.light_verb().count(),
        ambiguous_verbs_count: run.ambiguous_verbs_count,
        posts_count: run.scan_result.posts_count,
        reposts_skipped: run.scan_result.reposts_skipped,
        matches_count: run.scan_result.matches.len(),
    };

    // Lexicon rows, then entries that failed to compile, then unreadable posts
    let errors: Vec<String> = run
        .load
        .errors
        .iter()
        .chain(run.report.errors.iter())
        .map(|error| error.to_string())
        .chain(run.scan_result.errors.iter().cloned())
        .collect();

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            errors,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        loanwords: run.scan_result.summarize(&run.report.matchers),
    }
}

fn write_output(output_file: &str, output: &Output) -> std::io::Result<()> {
    let json_output = match to_string_pretty(output) {
        Ok(json) => json,
        Err(err) => return Err(std::io::Error::other(err)),
    };
    let mut file = File::create(output_file)?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
