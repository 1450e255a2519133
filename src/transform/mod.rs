//! The deterministic transform library.
//!
//! Every function here is a pure function of its inputs, and its exact
//! output is part of the password-compatibility contract: a password
//! derived today must match one derived years from now from the same
//! inputs. All index arithmetic is in characters, not bytes. Structurally
//! invalid numeric arguments (an inverted range, say) degrade to "return
//! the input unchanged" instead of failing, so sequences that were written
//! against malformed arguments keep producing their historical passwords.

pub mod legacy;
pub mod random;
pub mod wordlist;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine as _;
use sha2::{Digest, Sha256, Sha512};

use random::SeededRandom;
use wordlist::WORDLIST;

/// Characters inserted by [`add_simple_special_characters`].
pub const SIMPLE_SPECIAL_CHARS: &str = "#+*%&[]=?_.:";

const SAFE_CHARS: &str = "abcdefghkmnpqrsuvwxyz";
const UNSAFE_CHARS: &str = "ZlLtTiIjJoO012";

/// Base58 (Bitcoin alphabet) encoding of raw bytes.
pub fn base58(input: &[u8]) -> String {
    bs58::encode(input).into_string()
}

/// Standard Base64 encoding (with padding) of raw bytes.
pub fn base64(input: &[u8]) -> String {
    BASE64_ENGINE.encode(input)
}

/// Raw SHA-256 digest bytes of the input.
pub fn sha256(input: &[u8]) -> Vec<u8> {
    Sha256::digest(input).to_vec()
}

/// Raw SHA-512 digest bytes of the input.
pub fn sha512(input: &[u8]) -> Vec<u8> {
    Sha512::digest(input).to_vec()
}

pub fn append(s: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(s.len() + suffix.len());
    out.push_str(s);
    out.push_str(suffix);
    out
}

pub fn prepend(s: &str, prefix: &str) -> String {
    append(prefix, s)
}

/// `key:user@domain` appended to the input; the conventional first segment
/// of a sequence.
pub fn init(s: &str, key: &str, domain: &str, user: &str) -> String {
    let mut out = String::from(s);
    out.push_str(key);
    out.push(':');
    out.push_str(user);
    out.push('@');
    out.push_str(domain);
    out
}

/// Substring between `begin` (clamped to >= 0) and `end` (clamped to the
/// length), exclusive; empty when the clamped range is inverted.
pub fn cut(s: &str, begin: i64, end: i64) -> String {
    let chars: Vec<char> = s.chars().collect();
    let begin = begin.max(0);
    let end = end.min(chars.len() as i64);
    if begin >= end {
        return String::new();
    }
    chars[begin as usize..end as usize].iter().collect()
}

/// The first `n` characters of the input.
pub fn limit(s: &str, n: i64) -> String {
    cut(s, 0, n)
}

/// Every occurrence of `from` replaced with `to`.
pub fn replace(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

/// Replaces the one character at `index` (clamped into the string) with
/// `replacement`; empty input passes through unchanged.
pub fn replace_at(s: &str, index: i64, replacement: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let index = index.clamp(0, chars.len() as i64 - 1) as usize;
    let mut out: String = chars[..index].iter().collect();
    out.push_str(replacement);
    out.extend(&chars[index + 1..]);
    out
}

/// Inserts `text` at `index`, clamped into `[0, len]`.
pub fn insert(s: &str, index: i64, text: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let index = index.clamp(0, chars.len() as i64) as usize;
    let mut out: String = chars[..index].iter().collect();
    out.push_str(text);
    out.extend(&chars[index..]);
    out
}

/// The input bytes read as one little-endian unsigned integer, in decimal.
pub fn to_int(input: &[u8]) -> String {
    // Little-endian limbs, most significant last; repeated division by 10.
    let mut limbs: Vec<u8> = input.to_vec();
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        return String::from("0");
    }
    let mut digits = Vec::new();
    while !limbs.is_empty() {
        let mut rem: u32 = 0;
        for limb in limbs.iter_mut().rev() {
            let cur = rem * 256 + u32::from(*limb);
            *limb = (cur / 10) as u8;
            rem = cur % 10;
        }
        digits.push(char::from(b'0' + rem as u8));
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
    }
    digits.iter().rev().collect()
}

/// One deterministic draw in `[min, max]` seeded from the input bytes,
/// rendered in decimal. An inverted range yields `None` (the caller keeps
/// the input unchanged).
pub fn seed_number(input: &[u8], min: i64, max: i64) -> Option<String> {
    if max < min {
        return None;
    }
    Some(SeededRandom::from_bytes(input).randint(min, max).to_string())
}

/// Replaces easily confused characters with characters from a fixed safe
/// set, one confusable at a time in a fixed order; each substitution is
/// seeded from the string produced by the previous one.
pub fn make_unambiguous(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let safe: Vec<char> = SAFE_CHARS.chars().collect();
    let top = safe.len() as i64 - 1;
    let mut out = String::from(s);
    for unsafe_char in UNSAFE_CHARS.chars() {
        let mut seeded = out.clone();
        seeded.push(unsafe_char);
        let pick = SeededRandom::from_text(&seeded).randint(0, top) as usize;
        out = out.replace(unsafe_char, &safe[pick].to_string());
    }
    out
}

/// Inserts a seeded count of characters from `charset` into the input, one
/// per advancing window.
///
/// The entry length is captured once; each insertion grows the working
/// string but never the window arithmetic, and each iteration's draws are
/// seeded from the working string so far plus the iteration index.
pub fn add_special_characters(s: &str, min_count: i64, max_count: i64, charset: &str) -> String {
    if max_count < min_count || charset.is_empty() {
        return String::from(s);
    }

    let chars: Vec<char> = s.chars().collect();
    let ls = chars.len() as i64;
    let num_chars = SeededRandom::from_text(s).randint(min_count, max_count).min(ls);
    if num_chars <= 0 {
        return String::from(s);
    }

    let charset: Vec<char> = charset.chars().collect();
    let top = charset.len() as i64 - 1;
    let dst = ls / num_chars;

    let mut work = chars;
    let mut pos = 0i64;
    for i in 0..num_chars {
        let mut tmp: String = work.iter().collect();
        tmp.push_str(&i.to_string());
        let digest = sha256(tmp.as_bytes());

        let pick = SeededRandom::from_bytes(&digest).randint(0, top) as usize;
        let ipos = SeededRandom::from_text(&tmp).randint(pos, pos + dst) as usize;

        work.insert(ipos.min(work.len()), charset[pick]);
        pos += dst + 1;
    }
    work.into_iter().collect()
}

/// [`add_special_characters`] with the fixed simple charset.
pub fn add_simple_special_characters(s: &str, min_count: i64, max_count: i64) -> String {
    add_special_characters(s, min_count, max_count, SIMPLE_SPECIAL_CHARS)
}

/// At least one and at most `sqrt(len)/2` characters from `charset`.
pub fn add_some_special_characters(s: &str, charset: &str) -> String {
    let max_count = some_count(s);
    add_special_characters(s, 1, max_count, charset)
}

/// At least one and at most `sqrt(len)/2` characters from the simple set.
pub fn add_some_simple_special_characters(s: &str) -> String {
    let max_count = some_count(s);
    add_simple_special_characters(s, 1, max_count)
}

fn some_count(s: &str) -> i64 {
    let len = s.chars().count();
    (((len as f64).sqrt() / 2.0).floor() as i64).max(1)
}

/// Capitalizes a seeded selection of the words in the input (at least one,
/// maybe all). Words are fragments split on space, `.` and `_` that start
/// with a letter; each selected word has the first character of its first
/// occurrence uppercased.
pub fn capitalize_some(s: &str) -> String {
    let words: Vec<&str> = s
        .split([' ', '.', '_'])
        .filter(|w| w.chars().next().is_some_and(|c| c.is_alphabetic()))
        .collect();
    if words.is_empty() {
        return String::from(s);
    }

    let mut rng = SeededRandom::from_text(s);
    let num_words = rng.randint(1, words.len() as i64) as usize;
    let picks = rng.sample_indices(words.len(), num_words);

    let mut out: Vec<char> = s.chars().collect();
    for pick in picks {
        let word: Vec<char> = words[pick].chars().collect();
        let Some(at) = find_chars(&out, &word) else {
            continue;
        };
        let upper: Vec<char> = out[at].to_uppercase().collect();
        out.splice(at..at + 1, upper);
    }
    out.into_iter().collect()
}

fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// A seeded count of words in `[min, max]` drawn from the fixed word list
/// and joined with single spaces; word `i` is indexed by a draw seeded from
/// `sha256(input + i)`.
pub fn diceware(s: &str, min_count: i64, max_count: i64) -> String {
    if max_count < min_count {
        return String::from(s);
    }
    let num_words = SeededRandom::from_text(s).randint(min_count, max_count);
    let top = WORDLIST.len() as i64 - 1;

    let mut picked = Vec::new();
    for i in 0..num_words.max(0) {
        let digest = sha256(format!("{s}{i}").as_bytes());
        let index = SeededRandom::from_bytes(&digest).randint(0, top) as usize;
        picked.push(WORDLIST[index]);
    }
    picked.join(" ")
}

/// Three to four diceware words.
pub fn diceware_short(s: &str) -> String {
    diceware(s, 3, 4)
}

/// Four to five diceware words.
pub fn diceware_long(s: &str) -> String {
    diceware(s, 4, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_prepend() {
        assert_eq!(append("", ""), "");
        assert_eq!(append("a", ""), "a");
        assert_eq!(append("", "a"), "a");
        assert_eq!(append("hello", "world"), "helloworld");
        assert_eq!(prepend("hello", "world"), "worldhello");
        assert_eq!(prepend("", "a"), "a");
    }

    #[test]
    fn test_init() {
        assert_eq!(init("", "key", "domain", "user"), "key:user@domain");
        assert_eq!(init("x", "k", "d", ""), "xk:@d");
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut("", 0, 0), "");
        assert_eq!(cut("a", 0, 0), "");
        assert_eq!(cut("hello world", 0, 0), "");
        assert_eq!(cut("hello world", 0, 5), "hello");
        assert_eq!(cut("hello world", 6, 11), "world");
        assert_eq!(cut("hello world", 6, 200), "world");
        assert_eq!(cut("hello world", -200, 200), "hello world");
        assert_eq!(cut("hello world", 200, -200), "");
        assert_eq!(limit("hello world", 5), "hello");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("", "", ""), "");
        assert_eq!(replace("a", "a", ""), "");
        assert_eq!(replace("a", "a", "b"), "b");
        assert_eq!(replace("henno", "n", "l"), "hello");
        assert_eq!(replace("hello world", "l", "abc"), "heabcabco worabcd");
    }

    #[test]
    fn test_replace_at() {
        assert_eq!(replace_at("", 0, "a"), "");
        assert_eq!(replace_at("a", 0, "b"), "b");
        assert_eq!(replace_at("abc", 200, "1"), "ab1");
        assert_eq!(replace_at("abc", -200, "1"), "1bc");
        assert_eq!(replace_at("hello world", 5, "1"), "hello1world");
    }

    #[test]
    fn test_insert() {
        assert_eq!(insert("", 0, ""), "");
        assert_eq!(insert("", 0, "a"), "a");
        assert_eq!(insert("a", 0, ""), "a");
        assert_eq!(insert("a", 1, "b"), "ab");
        assert_eq!(insert("a", 0, "b"), "ba");
        assert_eq!(insert("a", 200, "b"), "ab");
        assert_eq!(insert("a", -200, "b"), "ba");
        assert_eq!(insert("heo", 2, "ll"), "hello");
        assert_eq!(insert("helld", 3, "lo wor"), "hello world");
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(b""), "0");
        assert_eq!(to_int(b"abc"), "6513249");
        assert_eq!(to_int(b"hello"), "478560413032");
        assert_eq!(
            to_int(&sha512(b"")),
            "3291835376408573590478209986637364656599265025014012802863049622424083630\
             783948306431999498413285667939592978357630573418285899181951386474024455144309711"
        );
    }

    #[test]
    fn test_seed_number() {
        assert_eq!(seed_number(b"", 0, 65535).unwrap(), "59569");
        assert_eq!(seed_number(b"abc", 0, 65535).unwrap(), "60319");
        assert_eq!(seed_number(b"hello world", 0, 65535).unwrap(), "53137");
        assert_eq!(seed_number(b"x", 0, 4294967295).unwrap(), "2709212627");
        assert_eq!(seed_number(b"hello", 10, 20).unwrap(), "15");
        assert_eq!(seed_number(b"hello", 20, 10), None);
    }

    #[test]
    fn test_base58() {
        assert_eq!(base58(b""), "");
        assert_eq!(base58(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(base58(b"\x00\x00a"), "112g");
        assert_eq!(base58(&sha256(b"abc")), "DYu3G8aGTMBW1WrTw76zxQJQU4DHLw9MLyy7peG4LKkY");
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64(b"hello"), "aGVsbG8=");
        assert_eq!(base64(&sha256(b"abc")), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }

    #[test]
    fn test_make_unambiguous() {
        assert_eq!(make_unambiguous(""), "");
        assert_eq!(make_unambiguous("hello world"), "hewwf wfrwd");
        assert_eq!(
            make_unambiguous("abcdefghijklmnopqrstuvwxyz"),
            "abcdefghcxknmncpqrssuvwxyz"
        );
        assert_eq!(make_unambiguous("ZOO101"), "wmmava");
        assert_eq!(make_unambiguous("jitter TOOL 2021"), "mvsser uyym ubuf");
        assert_eq!(
            make_unambiguous(
                "5S4rnaTNWonxss1u8LzsaJdEph1AJhWUF4sh2waXKMsutyfAxg4ybUeuXVWS9HdNcEypmeXn8FZGonD4w1rj9DZp"
            ),
            "5S4rnaxNWwnxssku8uzsagdEphkAghWUF4shwwaXKMsubyfAxg4ybUeuXVWS9HdNcEypmeXn8FeGwnD4wkrn9Dep"
        );
    }

    #[test]
    fn test_add_special_characters() {
        assert_eq!(add_some_simple_special_characters(""), "");
        assert_eq!(add_some_simple_special_characters("abc"), ":abc");
        assert_eq!(add_some_simple_special_characters("hello"), "h:ello");
        assert_eq!(add_some_simple_special_characters("hello world"), "h#ello world");
        assert_eq!(
            add_some_simple_special_characters("aspen spoon 567 scrap"),
            "aspen spoon 567# scrap"
        );
        assert_eq!(
            add_special_characters("correct horse battery staple", 2, 5, "!@#$%^"),
            "c@orrect horse #batte!ry staple"
        );
        assert_eq!(
            add_simple_special_characters("correct horse battery staple", 1, 3),
            "co%rrect horse battery staple"
        );
        assert_eq!(
            add_some_special_characters("correct horse battery staple", "!?"),
            "co!rrect horse battery staple"
        );
    }

    #[test]
    fn test_add_special_characters_degrades_on_invalid_args() {
        assert_eq!(add_special_characters("abc", 5, 2, "#"), "abc");
        assert_eq!(add_special_characters("abc", 1, 2, ""), "abc");
    }

    #[test]
    fn test_capitalize_some() {
        assert_eq!(capitalize_some(""), "");
        assert_eq!(capitalize_some("abc"), "Abc");
        assert_eq!(capitalize_some("hello"), "Hello");
        assert_eq!(capitalize_some("hello world"), "Hello World");
        assert_eq!(capitalize_some("aspen spoon 567 scrap"), "aspen Spoon 567 scrap");
        assert_eq!(
            capitalize_some("many words to choose from here today ok"),
            "Many Words to Choose from Here today ok"
        );
        assert_eq!(
            capitalize_some("dots.and_unders mixed.up_here"),
            "Dots.And_Unders Mixed.Up_Here"
        );
        assert_eq!(capitalize_some("a.b.c d_e"), "A.B.C D_E");
        // No fragment starts with a letter: nothing to do.
        assert_eq!(capitalize_some("123 456"), "123 456");
    }

    #[test]
    fn test_diceware() {
        assert_eq!(diceware("", 1, 4), "swam kick chaos eel");
        assert_eq!(diceware("", 4, 4), "swam kick chaos eel");
        assert_eq!(diceware("abc", 1, 4), "hunt flew condor steak");
        assert_eq!(diceware("hello", 1, 4), "case rosy ham");
        assert_eq!(diceware("hello", 4, 4), "case rosy ham frisky");
        assert_eq!(diceware("hello world", 1, 4), "brew hid point velvet");
        assert_eq!(diceware("aspen spoon 567 scrap", 1, 4), "autumn sandal");
        assert_eq!(diceware("aspen spoon 567 scrap", 4, 4), "autumn sandal odor lease");
        assert_eq!(diceware("x", 5, 2), "x");
    }

    #[test]
    fn test_diceware_short_long() {
        assert_eq!(diceware_short("key:user@domain"), "mill leg gopher");
        assert_eq!(diceware_long("key:user@domain"), "mill leg gopher dip");
        assert_eq!(diceware("", 4, 4).split(' ').count(), 4);
    }
}
