// fastq-pair/src/pair.rs
//
// The pairing engine: index the left stream, scan the right stream against
// the index, then sweep the index for left-side orphans. Two sequential
// passes plus one sweep, strictly single-threaded.

use crate::error::{PairError, Result};
use crate::ident::canonical_id;
use crate::index::HashIndex;
use crate::opts::PairOpt;
use crate::paths::output_names;
use crate::store::{FastqReader, FastqRecord, FastqWriter};
use std::path::Path;

/// Tallies for one run. Monotonic for the duration of the run; paired
/// counts move in lockstep (every paired emission increments both).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PairCounts {
    pub left_paired: u64,
    pub right_paired: u64,
    pub left_single: u64,
    pub right_single: u64,
    pub left_duplicates: u64,
    pub right_duplicates: u64,
}

impl PairCounts {
    /// End-of-run summary; the duplicates line only appears when
    /// deduplication was on.
    pub fn report(&self, deduplicate: bool) -> String {
        let mut out = format!(
            "Left paired: {:<14} Right paired: {}\nLeft single: {:<14} Right single: {}\n",
            self.left_paired, self.right_paired, self.left_single, self.right_single
        );
        if deduplicate {
            out.push_str(&format!(
                "Left duplicates: {:<10} Right duplicates: {}\n",
                self.left_duplicates, self.right_duplicates
            ));
        }
        out
    }
}

/// Write one record, optionally rewriting its header to the canonical id
/// plus the mate digit.
fn emit(
    writer: &mut FastqWriter,
    record: &FastqRecord,
    id: &str,
    mate: char,
    format_id: bool,
) -> Result<()> {
    if format_id {
        writer.write_line(&format!("{id}{mate}\n"))?;
        for line in &record.lines[1..] {
            writer.write_line(line)?;
        }
        Ok(())
    } else {
        writer.write_record(record)
    }
}

/// A recorded offset must still hold a record; anything else means the
/// stream changed underneath us or the offset bookkeeping is wrong.
fn reread(reader: &mut FastqReader, path: &Path, offset: u64) -> Result<FastqRecord> {
    reader.seek(offset)?;
    reader.read_record()?.ok_or(PairError::Truncated {
        path: path.to_path_buf(),
        offset,
    })
}

/// Partition `left` and `right` into paired and single outputs.
///
/// Builds a hash index over the left stream, streams the right file against
/// it, and finally emits every left record the matcher never printed. The
/// four output files are derived from the input names and gzipped when
/// either input is gzipped.
pub fn pair_files(left: &Path, right: &Path, opt: &PairOpt) -> Result<PairCounts> {
    let mut counts = PairCounts::default();

    let mut ids_left = HashIndex::new(opt.table_size)?;
    // The right stream gets its own, independent table, used only to spot
    // repeated right-side ids.
    let mut ids_right = if opt.deduplicate {
        Some(HashIndex::new(opt.table_size)?)
    } else {
        None
    };

    let mut left_reader = FastqReader::open(left)?;
    let mut right_reader = FastqReader::open(right)?;
    let gzip_out = left_reader.is_gzipped() || right_reader.is_gzipped();
    log::info!("First file is gzipped: {}", left_reader.is_gzipped());
    log::info!("Second file is gzipped: {}", right_reader.is_gzipped());
    log::info!("Output files will be gzipped: {}", gzip_out);

    // Pass 1: index the left stream. A record's offset is the stream
    // position before its header line (0 for the first record).
    loop {
        let start = left_reader.position();
        let Some(record) = left_reader.read_record()? else {
            break;
        };
        let id = canonical_id(record.header(), opt.split_at_whitespace);
        log::debug!("ID first file is |{id}|");
        if opt.deduplicate && ids_left.contains(&id) {
            log::debug!("Duplicate ID found in the first file, skipping: {id}");
            counts.left_duplicates += 1;
            continue;
        }
        ids_left.insert(id, start);
    }

    if opt.print_table_counts {
        println!("Bucket sizes");
        for (bucket, len) in ids_left.bucket_sizes().enumerate() {
            println!("{bucket}\t{len}");
        }
    }

    let [lp, rp, ls, rs] = output_names(left, right, gzip_out);
    log::info!(
        "Writing the paired reads to {} and {}",
        lp.display(),
        rp.display()
    );
    log::info!(
        "Writing the single reads to {} and {}",
        ls.display(),
        rs.display()
    );
    let mut left_paired = FastqWriter::create(&lp, gzip_out)?;
    let mut right_paired = FastqWriter::create(&rp, gzip_out)?;
    let mut left_single = FastqWriter::create(&ls, gzip_out)?;
    let mut right_single = FastqWriter::create(&rs, gzip_out)?;

    // Pass 2: stream the right file against the left index.
    loop {
        let start = right_reader.position();
        let Some(record) = right_reader.read_record()? else {
            break;
        };
        let id = canonical_id(record.header(), opt.split_at_whitespace);
        log::debug!("ID second file is |{id}|");

        if let Some(seen) = ids_right.as_mut() {
            if seen.contains(&id) {
                log::debug!("Duplicate ID found in the second file, skipping: {id}");
                counts.right_duplicates += 1;
                continue;
            }
            seen.insert(id.clone(), start);
        }

        match ids_left.mark_printed(&id) {
            Some(offset) => {
                let mate = reread(&mut left_reader, left, offset)?;
                emit(&mut left_paired, &mate, &id, '1', opt.format_id)?;
                counts.left_paired += 1;
                emit(&mut right_paired, &record, &id, '2', opt.format_id)?;
                counts.right_paired += 1;
            }
            None => {
                emit(&mut right_single, &record, &id, '2', opt.format_id)?;
                counts.right_single += 1;
            }
        }
    }

    // Sweep: everything still unprinted in the left index is an orphan.
    for entry in ids_left.unprinted() {
        let record = reread(&mut left_reader, left, entry.offset)?;
        emit(&mut left_single, &record, &entry.canonical_id, '1', opt.format_id)?;
        counts.left_single += 1;
    }

    left_paired.finish()?;
    right_paired.finish()?;
    left_single.finish()?;
    right_single.finish()?;

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::PairCounts;

    #[test]
    fn report_includes_duplicates_only_when_asked() {
        let counts = PairCounts {
            left_paired: 3,
            right_paired: 3,
            left_single: 1,
            right_single: 2,
            left_duplicates: 4,
            right_duplicates: 0,
        };
        let plain = counts.report(false);
        assert!(plain.contains("Left paired: 3"));
        assert!(plain.contains("Right single: 2"));
        assert!(!plain.contains("duplicates"));

        let dedup = counts.report(true);
        assert!(dedup.contains("Left duplicates: 4"));
        assert!(dedup.contains("Right duplicates: 0"));
    }
}
