pub mod error; // Error taxonomy for a run
pub mod ident; // Canonical id derivation and hashing
pub mod index; // Chained hash index over one stream
pub mod opts; // Run configuration
pub mod pair; // Pairing engine (build, match, orphan sweep)
pub mod paths; // Output filename derivation
pub mod store; // Seekable record reader/writer, gzip-transparent

pub use error::PairError;
pub use opts::PairOpt;
pub use pair::{pair_files, PairCounts};
