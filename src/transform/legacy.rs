//! Frozen legacy derivation pipelines.
//!
//! These reproduce, byte for byte, the derivation rules of earlier format
//! versions so that passwords generated back then can still be recovered.
//! Nothing in this module may change — every quirk below (the truncated
//! Base64 seed, the `%` substitutions, the separator table) is locked by
//! the compatibility vectors in the tests.

use super::{base64, cut, sha256, sha512};

const LEGACY_SEPARATORS: [char; 7] = ['_', '.', ',', ';', '!', '?', ' '];

fn limit20(s: &str) -> String {
    cut(s, 0, 20)
}

/// Arbitrary substitutions once meant to make passwords easier to read.
fn legacy_substitutions(s: &str) -> String {
    s.replace('i', "u")
        .replace('I', "P")
        .replace('l', "h")
        .replace('1', "T")
        .replace('0', "4")
        .replace('O', "r")
        .replace('o', "y")
        .replace("vv", "nW")
        .replace("VV", "K3")
}

/// Arbitrary integer derived from a string via its truncated Base64 form:
/// the decimal renderings of two little-endian chunks, concatenated.
fn legacy_seed(s: &str) -> u64 {
    let mut encoded = base64(s.as_bytes()).into_bytes();
    encoded.truncate(5);
    encoded.push(b'\n');

    let mut seed = le_int(&encoded[..encoded.len().min(4)]);
    if encoded.len() > 4 {
        let tail = le_int(&encoded[4..]);
        let mut magnitude = 10;
        while magnitude <= tail {
            magnitude *= 10;
        }
        seed = seed * magnitude + tail;
    }
    seed
}

fn le_int(bytes: &[u8]) -> u64 {
    let mut out = 0u64;
    for &b in bytes.iter().rev() {
        out = (out << 8) | u64::from(b);
    }
    out
}

/// Inserts separator characters at evenly spaced positions chosen by the
/// legacy seed, then trims surrounding whitespace.
fn legacy_add_separators(s: &str) -> String {
    let seps = legacy_seed(s) % 5;
    let mut work: Vec<char> = s.chars().collect();

    if seps > 0 {
        let step = work.len() / seps as usize;
        let mut next = step;
        for x in 0..seps {
            let sep = LEGACY_SEPARATORS[((seps + x) % 7) as usize];
            work.insert(next.min(work.len()), sep);
            next += step;
        }
    }

    let out: String = work.into_iter().collect();
    out.trim().to_string()
}

/// The original derivation: `sha256(key:domain)`, Base64, two fixed
/// substitutions, 20 characters, trailing newline.
pub fn bad_legacy1(acc: &str, key: &str, domain: &str) -> String {
    let seeded = format!("{acc}{key}:{domain}");
    let encoded = base64(&sha256(seeded.as_bytes()));
    let cleaned = encoded.replace('+', "E").replace('/', "a");
    let mut out = limit20(&cleaned);
    out.push('\n');
    out
}

/// The second-generation derivation (format versions 2 to 3.1): SHA-512
/// with the user folded in, then the legacy substitution and separator
/// passes, re-limited to 20 characters after each.
pub fn bad_legacy2(acc: &str, key: &str, domain: &str, user: &str) -> String {
    let seeded = if user.is_empty() {
        format!("{acc}{key}@{domain}")
    } else {
        format!("{acc}{key}:{user}@{domain}")
    };
    let encoded = base64(&sha512(seeded.as_bytes()));
    let cleaned = encoded.replace('+', "E").replace('/', "a");
    let mut out = limit20(&cleaned);
    out = limit20(&legacy_substitutions(&out));
    out = limit20(&legacy_add_separators(&out));
    out.push('\n');
    out
}
