//! filter-uniq demo driver
//!
//! Runs each deduplication strategy on the fixed sample sequence and on
//! generated random and arithmetic sequences, reporting the filtered output
//! and the wall-clock time of every run.
//!
//! Configuration is read from `FILTER_UNIQ_*` environment variables and can be
//! overridden with command line flags. Log verbosity follows `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - `0`: every branch ran
//! - `2`: invalid configuration, or a generated branch was aborted

use clap::Parser;
use filter_uniq::{
    BenchmarkConfig, Config, DedupError, DedupStats, HashTableConfig, OccurrenceCounter,
    SequenceGenerator, Strategy, SAMPLE_INPUT,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "filter-uniq", version, about = "Benchmark integer deduplication strategies")]
struct Cli {
    /// Run a single strategy instead of all of them
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Length of the generated sequences
    #[arg(long)]
    length: Option<usize>,

    /// Exclusive magnitude bound of the random sequence
    #[arg(long)]
    max_magnitude: Option<i64>,

    /// Distinct values in the arithmetic sequence
    #[arg(long)]
    distinct: Option<usize>,

    /// Seed of the pseudo-random source
    #[arg(long)]
    seed: Option<u64>,

    /// Outer bucket count of the sparse table
    #[arg(long)]
    outer_buckets: Option<usize>,

    /// Inner domain of both bucket tables
    #[arg(long)]
    domain: Option<usize>,

    /// Load the hash table sizing from a JSON file
    #[arg(long, value_name = "PATH")]
    table_config: Option<PathBuf>,

    /// Print input and filtered sequences
    #[arg(long)]
    show_values: bool,

    /// Emit one JSON record per run instead of text
    #[arg(long)]
    json: bool,

    /// Only run the fixed sample
    #[arg(long)]
    sample_only: bool,

    /// Print the unique and repeated values of each input
    #[arg(long)]
    report: bool,
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    input: &'a str,
    unique: Vec<i64>,
    repeated: Vec<(i64, usize)>,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    input: &'a str,
    strategy: Strategy,
    stats: &'a DedupStats,
}

fn table_config(cli: &Cli) -> filter_uniq::Result<HashTableConfig> {
    let mut config = match &cli.table_config {
        Some(path) => HashTableConfig::load_from_file(path)?,
        None => HashTableConfig::from_env()?,
    };
    if let Some(outer_buckets) = cli.outer_buckets {
        config.outer_buckets = outer_buckets;
    }
    if let Some(domain) = cli.domain {
        config.domain = domain;
    }
    config.validate()?;
    Ok(config)
}

fn benchmark_config(cli: &Cli) -> filter_uniq::Result<BenchmarkConfig> {
    let mut config = BenchmarkConfig::from_env()?;
    if let Some(length) = cli.length {
        config.length = length;
    }
    if let Some(max_magnitude) = cli.max_magnitude {
        config.max_magnitude = max_magnitude;
    }
    if let Some(distinct) = cli.distinct {
        config.distinct_count = distinct;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn print_report(cli: &Cli, label: &str, input: &[i64]) {
    let counter = OccurrenceCounter::from_values(input);
    if cli.json {
        let record = ReportRecord {
            input: label,
            unique: counter.unique(),
            repeated: counter.repeated(),
        };
        match serde_json::to_string(&record) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("failed to encode report record: {}", e),
        }
    } else {
        println!("REPORT [{}]", label);
        for line in counter.to_string().lines() {
            println!("  {}", line);
        }
        println!();
    }
}

fn run_branch(
    cli: &Cli,
    label: &str,
    input: &[i64],
    strategies: &[Strategy],
    table: &HashTableConfig,
) -> filter_uniq::Result<()> {
    if cli.report {
        print_report(cli, label, input);
    }
    for &strategy in strategies {
        let mut deduper = strategy.deduper(table)?;
        let output = deduper.dedupe(input);
        let stats = deduper.stats();

        if cli.json {
            let record = RunRecord {
                input: label,
                strategy,
                stats,
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{}", line),
                Err(e) => log::error!("failed to encode run record: {}", e),
            }
            continue;
        }

        println!("{} [{}]", strategy.name().to_uppercase(), label);
        if cli.show_values {
            println!("  Original array: {:?}", input);
            println!("  Filtered array: {:?}", output);
        } else {
            println!("  {} -> {} values", input.len(), output.len());
        }
        if let Some((min, max)) = stats.value_range {
            println!("  Value range: [{}, {}]", min, max);
        }
        if stats.buckets_allocated > 0 {
            println!(
                "  Buckets: {} ({} bytes)",
                stats.buckets_allocated, stats.bytes_allocated
            );
        }
        println!(
            "  Execution time: {:?}",
            Duration::from_micros(stats.processing_time_us)
        );
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (table, bench) = match (table_config(&cli), benchmark_config(&cli)) {
        (Ok(table), Ok(bench)) => (table, bench),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    log::info!("table sizing {:?}, benchmark {:?}", table, bench);

    let strategies: Vec<Strategy> = match cli.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    if let Err(e) = run_branch(&cli, "sample", &SAMPLE_INPUT, &strategies, &table) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }
    if cli.sample_only {
        return ExitCode::SUCCESS;
    }

    let mut generator = SequenceGenerator::new(bench.seed);
    let branches: [(&str, filter_uniq::Result<Vec<i64>>); 2] = [
        ("random", generator.random(bench.length, bench.max_magnitude)),
        ("arithmetic", generator.arithmetic(bench.length, bench.distinct_count)),
    ];

    let mut aborted = false;
    for (label, generated) in branches {
        let result = generated.and_then(|input| run_branch(&cli, label, &input, &strategies, &table));
        if let Err(e) = result {
            report_abort(label, &e);
            aborted = true;
        }
    }

    if aborted {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn report_abort(label: &str, err: &DedupError) {
    log::error!("{} branch aborted ({}): {}", label, err.category(), err);
    eprintln!("{} branch aborted: {}", label, err);
}
