// fastq-pair/src/index.rs
//
// Chained hash table mapping canonical ids to the byte offset of their
// record in the source stream. One table is built over the left stream;
// when deduplication is on, a second, independent table tracks ids already
// seen in the right stream.

use crate::error::{PairError, Result};
use crate::ident::hash_id;

/// One indexed record: its matching key, where its record starts in the
/// source stream, and whether the matcher has already emitted it.
#[derive(Debug)]
pub struct IndexEntry {
    pub canonical_id: String,
    pub offset: u64,
    pub printed: bool,
}

/// Fixed-bucket chained hash table over canonical ids.
///
/// Each bucket is an ordered chain with the *head* at the end of the vector:
/// insertion pushes, and head-to-tail traversal iterates in reverse, so the
/// most recently inserted entry is visited first.
pub struct HashIndex {
    buckets: Vec<Vec<IndexEntry>>,
}

impl HashIndex {
    /// Allocate a table with `table_size` buckets. An oversized `-t` value
    /// surfaces as `PairError::Table` rather than an abort.
    pub fn new(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(PairError::Table { size: 0 });
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(table_size)
            .map_err(|_| PairError::Table { size: table_size })?;
        buckets.resize_with(table_size, Vec::new);
        Ok(HashIndex { buckets })
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, id: &str) -> usize {
        hash_id(id) as usize % self.buckets.len()
    }

    /// True if `id` is already present in its chain.
    pub fn contains(&self, id: &str) -> bool {
        self.buckets[self.bucket_of(id)]
            .iter()
            .any(|e| e.canonical_id == id)
    }

    /// Insert unconditionally at the chain head.
    pub fn insert(&mut self, id: String, offset: u64) {
        let bucket = self.bucket_of(&id);
        self.buckets[bucket].push(IndexEntry {
            canonical_id: id,
            offset,
            printed: false,
        });
    }

    /// Look up `id`, marking every matching entry printed.
    ///
    /// The whole chain is walked head to tail and the candidate offset is
    /// overwritten on every match, so the offset returned belongs to the
    /// *last* matching entry encountered. With duplicates permitted in the
    /// chain that is the earliest-inserted entry, and every duplicate is
    /// marked printed regardless.
    pub fn mark_printed(&mut self, id: &str) -> Option<u64> {
        let bucket = self.bucket_of(id);
        let mut found = None;
        for entry in self.buckets[bucket].iter_mut().rev() {
            if entry.canonical_id == id {
                found = Some(entry.offset);
                entry.printed = true;
            }
        }
        found
    }

    /// Every entry the matcher never touched, in bucket-ascending order and
    /// head-to-tail within a bucket (most recently inserted first). With
    /// duplicate ids in the index the order is insertion-reversed, not
    /// stream order.
    pub fn unprinted(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().rev())
            .filter(|e| !e.printed)
    }

    /// Chain length per bucket, for the `-p` occupancy report.
    pub fn bucket_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|chain| chain.len())
    }
}
