// fastq-pair/src/paths.rs
//
// Output filename derivation: strip a known FASTQ suffix from the input
// name and append .paired/.single plus the output extension.

use std::path::{Path, PathBuf};

// Longest first, so .fastq.gz is not mistaken for .gz-less .fastq.
const FASTQ_SUFFIXES: [&str; 4] = [".fastq.gz", ".fq.gz", ".fastq", ".fq"];

fn strip_fastq_suffix(name: &str) -> &str {
    for suffix in FASTQ_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            return stem;
        }
    }
    name
}

/// The four output paths for a run: (left paired, right paired, left
/// single, right single). Outputs are gzipped when either input is.
pub fn output_names(left: &Path, right: &Path, gzip_out: bool) -> [PathBuf; 4] {
    let ext = if gzip_out { ".fastq.gz" } else { ".fastq" };
    let derive = |input: &Path, class: &str| {
        let name = input.to_string_lossy();
        PathBuf::from(format!("{}.{}{}", strip_fastq_suffix(&name), class, ext))
    };
    [
        derive(left, "paired"),
        derive(right, "paired"),
        derive(left, "single"),
        derive(right, "single"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffixes_are_stripped() {
        assert_eq!(strip_fastq_suffix("reads_1.fastq"), "reads_1");
        assert_eq!(strip_fastq_suffix("reads_1.fq"), "reads_1");
        assert_eq!(strip_fastq_suffix("reads_1.fastq.gz"), "reads_1");
        assert_eq!(strip_fastq_suffix("reads_1.fq.gz"), "reads_1");
        assert_eq!(strip_fastq_suffix("reads_1.txt"), "reads_1.txt");
    }

    #[test]
    fn paired_and_single_names() {
        let [lp, rp, ls, rs] = output_names(
            Path::new("left.fastq"),
            Path::new("right.fq"),
            false,
        );
        assert_eq!(lp, PathBuf::from("left.paired.fastq"));
        assert_eq!(rp, PathBuf::from("right.paired.fastq"));
        assert_eq!(ls, PathBuf::from("left.single.fastq"));
        assert_eq!(rs, PathBuf::from("right.single.fastq"));
    }

    #[test]
    fn gzip_outputs_get_gz_extension() {
        let [lp, _, _, rs] = output_names(
            Path::new("dir/left.fastq.gz"),
            Path::new("dir/right.fastq"),
            true,
        );
        assert_eq!(lp, PathBuf::from("dir/left.paired.fastq.gz"));
        assert_eq!(rs, PathBuf::from("dir/right.single.fastq.gz"));
    }
}
