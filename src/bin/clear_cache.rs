// src/bin/clear_cache.rs
//! Bulk-delete cache keys matching a glob, in batches with verification
//! and per-key retries. Exits 1 when any key could not be removed.

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::Parser;
use sougi_core::application::{
    commands::cache::{CacheCommandService, ClearCacheCommand, ClearPolicy},
    dto::ClearCacheReportDto,
    ports::progress::ProgressSink,
};
use sougi_core::infrastructure::{
    cache::RedisCacheStore, logging::init_tracing, progress::FileProgressSink, time::SystemClock,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Glob of keys to delete, e.g. `search:*`
    #[arg(value_name = "PATTERN")]
    positional_pattern: Option<String>,

    /// Same as the positional PATTERN
    #[arg(long)]
    pattern: Option<String>,

    /// Stop after this many matching keys
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long, default_value_t = 50)]
    batch_size: usize,

    /// Individual retries per key that survives its batch
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Progress file rewritten after every batch
    #[arg(long, default_value = "clear-cache-progress.json")]
    file: PathBuf,

    /// Only count matching keys
    #[arg(long)]
    dry_run: bool,

    /// Skip the existence check after deleting
    #[arg(long)]
    no_verify: bool,

    #[arg(long, env = "REDIS_URL", hide_env_values = true)]
    redis_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match run(Args::parse()).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("clear_cache: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ClearCacheReportDto> {
    let Some(pattern) = args.pattern.or(args.positional_pattern) else {
        bail!("a key pattern is required, e.g. `clear_cache 'search:*'`");
    };
    let Some(redis_url) = args.redis_url else {
        bail!("REDIS_URL (or --redis-url) is required");
    };
    if args.batch_size == 0 {
        bail!("--batch-size must be at least 1");
    }

    let store = RedisCacheStore::from_url(&redis_url)?;
    store.ping().await.context("redis is not reachable")?;

    let policy = ClearPolicy {
        batch_size: args.batch_size,
        max_retries: args.retries,
        ..ClearPolicy::default()
    };
    let service = CacheCommandService::new(Arc::new(store), Arc::new(SystemClock), policy);
    let sink = FileProgressSink::new(&args.file);
    let progress: &dyn ProgressSink = &sink;

    let report = service
        .clear_cache(
            ClearCacheCommand {
                pattern,
                limit: args.limit,
                verify: !args.no_verify,
                dry_run: args.dry_run,
            },
            Some(progress),
        )
        .await?;

    print_report(&report, &args.file);
    Ok(report)
}

fn print_report(report: &ClearCacheReportDto, progress_file: &std::path::Path) {
    if report.dry_run {
        println!(
            "dry run: {} keys match '{}' ({} batches)",
            report.scanned, report.pattern, report.batches
        );
        return;
    }
    println!(
        "pattern '{}': scanned {}, deleted {}, verified {}, failed {}",
        report.pattern,
        report.scanned,
        report.deleted,
        report.verified,
        report.failed.len()
    );
    for failed in &report.failed {
        println!("  failed {}: {}", failed.key, failed.error);
    }
    if report.batches > 0 {
        println!("progress written to {}", progress_file.display());
    }
}
