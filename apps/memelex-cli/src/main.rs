//! memelex - offline data hygiene for the meme-term collection
//!
//! Two batch passes over a JSON document of term records:
//!
//! ```text
//! memelex check   [INPUT] [OUTPUT]   # detect near-duplicate terms
//! memelex reindex [INPUT] [OUTPUT]   # flatten nesting, reassign ids
//! ```
//!
//! `check` writes OUTPUT (default `memes_cleaned.json`) only when it finds
//! something; `reindex` always writes OUTPUT (default `memes_final.json`).

use std::path::Path;
use std::process::ExitCode;

use memelex_core::deduplication::check_and_clean;
use memelex_core::flatten::reindex_document;

const DEFAULT_INPUT: &str = "memes.json";
const DEFAULT_CLEANED: &str = "memes_cleaned.json";
const DEFAULT_FINAL: &str = "memes_final.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("check") => run_check(&args[1..]),
        Some("reindex") => run_reindex(&args[1..]),
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage();
            return ExitCode::from(2);
        }
        None => {
            print_usage();
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("usage: memelex check   [INPUT] [OUTPUT]");
    eprintln!("       memelex reindex [INPUT] [OUTPUT]");
    eprintln!();
    eprintln!("defaults: INPUT={DEFAULT_INPUT},");
    eprintln!("          OUTPUT={DEFAULT_CLEANED} (check) / {DEFAULT_FINAL} (reindex)");
}

fn run_check(args: &[String]) -> Result<(), memelex_core::StoreError> {
    let input = args.first().map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CLEANED);

    let outcome = check_and_clean(Path::new(input), Path::new(output))?;

    println!("Loaded {} entries from {input}.", outcome.loaded);

    let detection = &outcome.detection;
    if detection.pairs.is_empty() {
        println!("No suspected duplicates (two or more shared characters). Nothing written.");
        return Ok(());
    }

    println!(
        "Found {} suspected duplicate pair(s):",
        detection.pairs.len()
    );
    for (index, pair) in detection.pairs.iter().enumerate() {
        println!(
            "  [{}] {} (ID:{}) <==> {} (ID:{})  shared: '{}'",
            index + 1,
            pair.term_a,
            pair.id_a,
            pair.term_b,
            pair.id_b,
            pair.shared
        );
    }

    println!();
    println!("Removed {} entries, kept {}.", detection.removed_count(), outcome.kept_count());
    if let Some(path) = &outcome.written {
        println!("Cleaned collection written to {}.", path.display());
    }
    Ok(())
}

fn run_reindex(args: &[String]) -> Result<(), memelex_core::StoreError> {
    let input = args.first().map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(1).map(String::as_str).unwrap_or(DEFAULT_FINAL);

    let outcome = reindex_document(Path::new(input), Path::new(output))?;

    let rejected = outcome.flatten.rejected_count();
    if rejected > 0 {
        println!("Dropped {rejected} element(s) that were neither records nor nested arrays.");
    }
    println!(
        "Flattened and renumbered {} entries (ids 1 to {}).",
        outcome.record_count(),
        outcome.record_count()
    );
    println!("Final collection written to {}.", outcome.written.display());
    Ok(())
}
