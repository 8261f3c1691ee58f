// fastq-pair/src/error.rs
//
// Error taxonomy for one pairing run. Everything here is fatal: this is a
// one-shot batch transformation, so the first failure terminates the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PairError {
    /// The bucket vector for the hash table could not be allocated.
    #[error("cannot allocate a hash table with {size} buckets; try a smaller value for -t")]
    Table { size: usize },

    #[error("can't open file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("can't create file {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    /// A header line was read but the record's remaining three lines were
    /// not all present. The offset is the start of the offending record.
    #[error("{}: truncated record at offset {offset}: header present but fewer than 3 following lines", path.display())]
    Truncated { path: PathBuf, offset: u64 },

    #[error("{}: I/O error: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, PairError>;
