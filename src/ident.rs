// fastq-pair/src/ident.rs
//
// Canonical id derivation and the hash used to bucket ids.
//
// The matching key for a read is its header line (leading '@' included)
// with the line terminator stripped, optionally truncated at the first
// whitespace, and with the mate marker removed: a trailing 1/2/f/r that
// follows a '/', '_' or '.' separator is dropped, leaving the separator in
// the key. Ids that carry no recognized separator get their last character
// replaced (not appended to) with '/'; both streams receive the same
// transform, so such ids still match each other.

#[path = "ident_test.rs"]
#[cfg(test)]
mod ident_test;

const MATE_SEPARATORS: [char; 3] = ['/', '_', '.'];
const MATE_MARKERS: [char; 4] = ['1', '2', 'f', 'r'];

/// Derive the canonical matching key from a raw header line.
///
/// Always returns an owned `String`: callers hold canonical ids across
/// subsequent reads, so the key must never borrow from a read buffer.
pub fn canonical_id(header: &str, split_at_whitespace: bool) -> String {
    let mut id = header.strip_suffix('\n').unwrap_or(header);
    id = id.strip_suffix('\r').unwrap_or(id);

    if split_at_whitespace {
        if let Some(cut) = id.find([' ', '\t']) {
            id = &id[..cut];
        }
    }

    let mut chars = id.chars().rev();
    let last = chars.next();
    let last_but_one = chars.next();

    match (last_but_one, last) {
        (Some(sep), Some(marker)) if MATE_SEPARATORS.contains(&sep) => {
            let mut id = id.to_string();
            if MATE_MARKERS.contains(&marker) {
                id.pop();
            }
            id
        }
        (_, Some(last)) => {
            // No recognized separator: the last character is replaced with
            // '/' (length unchanged).
            let mut id = id.to_string();
            id.truncate(id.len() - last.len_utf8());
            id.push('/');
            id
        }
        _ => String::new(),
    }
}

/// Polynomial string hash over the canonical id's bytes, 32-bit wrapping.
pub fn hash_id(id: &str) -> u32 {
    let mut h: u32 = 0;
    for &b in id.as_bytes() {
        h = (b as u32).wrapping_add(h.wrapping_mul(31));
    }
    h
}
