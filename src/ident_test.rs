// fastq-pair/src/ident_test.rs

use super::{canonical_id, hash_id};

#[test]
fn mate_markers_are_dropped() {
    assert_eq!(canonical_id("@read1/1", false), "@read1/");
    assert_eq!(canonical_id("@read1/2", false), "@read1/");
    assert_eq!(canonical_id("@read1_1", false), "@read1_");
    assert_eq!(canonical_id("@read1.2", false), "@read1.");
    assert_eq!(canonical_id("@read1/f", false), "@read1/");
    assert_eq!(canonical_id("@read1/r", false), "@read1/");
}

#[test]
fn both_mates_normalize_to_the_same_key() {
    assert_eq!(
        canonical_id("@read1/1", false),
        canonical_id("@read1/2", false)
    );
    assert_eq!(
        canonical_id("@frag_f", false),
        canonical_id("@frag_r", false)
    );
}

#[test]
fn unmarked_id_gets_last_char_replaced() {
    // The legacy fallback replaces (does not append) the last character.
    assert_eq!(canonical_id("@read1", false), "@read/");
    assert_eq!(canonical_id("@seq77", false), "@seq7/");
    // Applied to both streams, identical raw ids still match.
    assert_eq!(canonical_id("@seq77", false), canonical_id("@seq77", false));
}

#[test]
fn separator_with_unrecognized_marker_is_left_alone() {
    assert_eq!(canonical_id("@read/3", false), "@read/3");
    assert_eq!(canonical_id("@read_x", false), "@read_x");
}

#[test]
fn terminators_are_stripped() {
    assert_eq!(canonical_id("@read1/1\n", false), "@read1/");
    assert_eq!(canonical_id("@read1/1\r\n", false), "@read1/");
}

#[test]
fn whitespace_split() {
    assert_eq!(canonical_id("@read1 1:N:0:2\n", true), "@read/");
    assert_eq!(canonical_id("@read1/1\tcomment\n", true), "@read1/");
    // Without the flag the trailing text is part of the id.
    assert_eq!(canonical_id("@read1 1:N:0:2\n", false), "@read1 1:N:0:/");
}

#[test]
fn degenerate_ids() {
    assert_eq!(canonical_id("", false), "");
    assert_eq!(canonical_id("\n", false), "");
    assert_eq!(canonical_id("@", false), "/");
}

#[test]
fn hash_matches_the_31_polynomial() {
    assert_eq!(hash_id(""), 0);
    assert_eq!(hash_id("a"), 97);
    // h("ab") = 'b' + 31 * 'a'
    assert_eq!(hash_id("ab"), 98 + 31 * 97);
    // Wrapping, not panicking, on long input.
    let long = "@".repeat(1000);
    let _ = hash_id(&long);
}

#[test]
fn equal_ids_hash_equal() {
    let a = canonical_id("@pair/1", false);
    let b = canonical_id("@pair/2", false);
    assert_eq!(hash_id(&a), hash_id(&b));
}
