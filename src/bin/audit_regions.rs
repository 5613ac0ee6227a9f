// src/bin/audit_regions.rs
//! Check the region table for slugs that would break URLs, optionally
//! backfilling romaji through the romanizer service or the kana table.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use sougi_core::application::ports::romanizer::Romanizer;
use sougi_core::domain::{
    region::{RegionEntry, RegionIssue, audit_entries},
    slug::{clean::MIN_SLUG_LEN, clean_romanized, romanize_kana},
};
use sougi_core::infrastructure::{logging::init_tracing, romanizer::HttpRomanizer};

const BUILTIN_REGIONS: &str = include_str!("../../data/regions.json");

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Region table to audit; defaults to the built-in table
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print at most this many issues
    #[arg(long)]
    limit: Option<usize>,

    /// Backfill invalid romaji
    #[arg(long)]
    fix: bool,

    /// Where to write the fixed table; without it fixes are only reported
    #[arg(long, requires = "fix")]
    output: Option<PathBuf>,

    #[arg(long, env = "ROMANIZER_URL")]
    romanizer_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run(Args::parse()).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(remaining) => {
            eprintln!("audit_regions: {remaining} issue(s) remain");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("audit_regions: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of issues left after any fixing.
async fn run(args: Args) -> Result<usize> {
    let raw = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        None => BUILTIN_REGIONS.to_string(),
    };
    let mut entries: Vec<RegionEntry> =
        serde_json::from_str(&raw).context("region table is not valid JSON")?;

    let issues = audit_entries(&entries);
    println!("{} entries, {} issue(s)", entries.len(), issues.len());
    print_issues(&issues, args.limit);

    if !args.fix {
        return Ok(issues.len());
    }

    let romanizer = args
        .romanizer_url
        .as_deref()
        .map(HttpRomanizer::new)
        .transpose()?;
    let mut fixed = 0;
    for issue in issues.iter().filter(|i| i.problem.is_romaji()) {
        let entry = &mut entries[issue.index];
        match backfill(&entry.name, romanizer.as_ref()).await {
            Some(romaji) => {
                println!("  fixed {}: '{}' -> '{}'", entry.name, entry.romaji, romaji);
                entry.romaji = romaji;
                fixed += 1;
            }
            None => println!("  could not romanize {}", entry.name),
        }
    }
    println!("fixed {fixed} entr{}", if fixed == 1 { "y" } else { "ies" });

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(output, json + "\n")
            .await
            .with_context(|| format!("writing {}", output.display()))?;
        println!("wrote {}", output.display());
    }

    Ok(audit_entries(&entries).len())
}

async fn backfill(name: &str, romanizer: Option<&HttpRomanizer>) -> Option<String> {
    if let Some(romanizer) = romanizer {
        match romanizer.romanize(name).await {
            Ok(raw) => {
                let cleaned = clean_romanized(&raw);
                if cleaned.len() >= MIN_SLUG_LEN {
                    return Some(cleaned);
                }
            }
            Err(err) => tracing::warn!(name, error = %err, "romanizer failed"),
        }
    }
    let kana = romanize_kana(name);
    (kana.len() >= MIN_SLUG_LEN).then_some(kana)
}

fn print_issues(issues: &[RegionIssue], limit: Option<usize>) {
    let shown = limit.unwrap_or(issues.len()).min(issues.len());
    for issue in &issues[..shown] {
        println!(
            "  #{} {} (romaji '{}'): {}",
            issue.index, issue.name, issue.romaji, issue.problem
        );
    }
    if shown < issues.len() {
        println!("  ... {} more", issues.len() - shown);
    }
}
