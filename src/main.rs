use clap::Parser;
use std::path::PathBuf;

use fastq_pair::{pair_files, PairOpt};

#[derive(Parser)]
#[command(name = "fastq-pair")]
#[command(about = "Match up paired-end FASTQ reads and separate out the singletons", long_about = None)]
#[command(version)]
struct Cli {
    /// First (left) FASTQ file, plain or gzipped
    #[arg(value_name = "LEFT.FQ")]
    left: PathBuf,

    /// Second (right) FASTQ file, plain or gzipped
    #[arg(value_name = "RIGHT.FQ")]
    right: PathBuf,

    /// Number of hash buckets. More buckets mean fewer collisions but more
    /// memory; reduce this if allocation fails
    #[arg(short = 't', long, value_name = "INT", default_value = "100003")]
    table_size: usize,

    /// Skip reads whose id repeats within a file
    #[arg(short = 'd', long)]
    deduplicate: bool,

    /// Truncate ids at the first whitespace before matching
    #[arg(short = 's', long)]
    split_on_whitespace: bool,

    /// Rewrite output headers as <id>1 / <id>2
    #[arg(short = 'f', long)]
    format_id: bool,

    /// Print the hash bucket occupancy after indexing the first file
    #[arg(short = 'p', long)]
    print_table_counts: bool,

    /// Per-read diagnostics on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let opt = PairOpt {
        table_size: cli.table_size,
        deduplicate: cli.deduplicate,
        split_at_whitespace: cli.split_on_whitespace,
        format_id: cli.format_id,
        print_table_counts: cli.print_table_counts,
        verbose: cli.verbose,
    };

    match pair_files(&cli.left, &cli.right, &opt) {
        Ok(counts) => {
            print!("{}", counts.report(opt.deduplicate));
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
