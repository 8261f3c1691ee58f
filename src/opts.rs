// fastq-pair/src/opts.rs
//
// Run configuration consumed by the pairing engine.

/// Options for one pairing run.
#[derive(Debug, Clone)]
pub struct PairOpt {
    pub table_size: usize,         // Number of hash buckets (-t)
    pub deduplicate: bool,         // Skip repeated ids within a stream (-d)
    pub split_at_whitespace: bool, // Truncate ids at the first space/tab (-s)
    pub format_id: bool,           // Rewrite output headers as <id>1 / <id>2 (-f)
    pub print_table_counts: bool,  // Dump per-bucket chain lengths after indexing (-p)
    pub verbose: bool,             // Per-id diagnostics on stderr (-v)
}

impl Default for PairOpt {
    fn default() -> Self {
        PairOpt {
            table_size: 100_003,
            deduplicate: false,
            split_at_whitespace: false,
            format_id: false,
            print_table_counts: false,
            verbose: false,
        }
    }
}
