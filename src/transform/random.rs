//! Deterministic seeded generator for the transform library.
//!
//! Every seeded transform draws from this generator, so its output is part
//! of the password-compatibility contract: the seeding procedure, the
//! rejection sampling and the distinct-sampling algorithm below are pinned
//! and locked by literal vectors in the tests. Swapping any piece of this
//! module for a generic RNG silently changes derived passwords.

use sha2::{Digest, Sha512};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Mersenne Twister (MT19937) with byte- and integer-keyed seeding.
///
/// Seeding from text/bytes appends the SHA-512 digest of the input to the
/// input itself, interprets the result as one big-endian integer, and feeds
/// its little-endian 32-bit limbs to `init_by_array`. Integer seeds feed
/// their own limbs the same way.
pub struct SeededRandom {
    mt: [u32; N],
    mti: usize,
}

impl SeededRandom {
    /// Seed from UTF-8 text.
    pub fn from_text(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Seed from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let digest = Sha512::digest(bytes);
        let mut full = Vec::with_capacity(bytes.len() + digest.len());
        full.extend_from_slice(bytes);
        full.extend_from_slice(&digest);

        // The byte string is one big-endian integer; leading zero bytes
        // are not significant.
        let lead = full.iter().take_while(|&&b| b == 0).count();
        let significant = &full[lead..];

        let key = if significant.is_empty() {
            vec![0u32]
        } else {
            let mut words = Vec::with_capacity(significant.len() / 4 + 1);
            let mut end = significant.len();
            while end > 0 {
                let start = end.saturating_sub(4);
                let mut word: u32 = 0;
                for &b in &significant[start..end] {
                    word = (word << 8) | u32::from(b);
                }
                words.push(word);
                end = start;
            }
            words
        };

        let mut rng = Self { mt: [0; N], mti: N + 1 };
        rng.init_by_array(&key);
        rng
    }

    /// Seed from a non-negative integer.
    pub fn from_int(n: u64) -> Self {
        let key = if n == 0 {
            vec![0u32]
        } else {
            let mut words = Vec::new();
            let mut n = n;
            while n > 0 {
                words.push((n & 0xffff_ffff) as u32);
                n >>= 32;
            }
            words
        };

        let mut rng = Self { mt: [0; N], mti: N + 1 };
        rng.init_by_array(&key);
        rng
    }

    fn init_genrand(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..N {
            self.mt[i] = 1_812_433_253u32
                .wrapping_mul(self.mt[i - 1] ^ (self.mt[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        self.mti = N;
    }

    fn init_by_array(&mut self, key: &[u32]) {
        self.init_genrand(19_650_218);
        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(key.len()) {
            self.mt[i] = (self.mt[i]
                ^ (self.mt[i - 1] ^ (self.mt[i - 1] >> 30)).wrapping_mul(1_664_525))
            .wrapping_add(key[j])
            .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                self.mt[0] = self.mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            self.mt[i] = (self.mt[i]
                ^ (self.mt[i - 1] ^ (self.mt[i - 1] >> 30)).wrapping_mul(1_566_083_941))
            .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                self.mt[0] = self.mt[N - 1];
                i = 1;
            }
        }
        self.mt[0] = 0x8000_0000;
    }

    fn genrand(&mut self) -> u32 {
        if self.mti >= N {
            if self.mti == N + 1 {
                self.init_genrand(5489);
            }
            for kk in 0..N - M {
                let y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
                self.mt[kk] = self.mt[kk + M] ^ (y >> 1) ^ if y & 1 == 1 { MATRIX_A } else { 0 };
            }
            for kk in N - M..N - 1 {
                let y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
                self.mt[kk] =
                    self.mt[kk + M - N] ^ (y >> 1) ^ if y & 1 == 1 { MATRIX_A } else { 0 };
            }
            let y = (self.mt[N - 1] & UPPER_MASK) | (self.mt[0] & LOWER_MASK);
            self.mt[N - 1] = self.mt[M - 1] ^ (y >> 1) ^ if y & 1 == 1 { MATRIX_A } else { 0 };
            self.mti = 0;
        }

        let mut y = self.mt[self.mti];
        self.mti += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// `k` uniform random bits, `1 <= k <= 128`, little-endian word fill.
    fn getrandbits(&mut self, k: u32) -> u128 {
        debug_assert!(k >= 1 && k <= 128);
        if k <= 32 {
            return u128::from(self.genrand() >> (32 - k));
        }
        let mut out: u128 = 0;
        let mut shift = 0u32;
        let mut k = k;
        while k > 0 {
            let mut r = self.genrand();
            if k < 32 {
                r >>= 32 - k;
            }
            out |= u128::from(r) << shift;
            shift += 32;
            k = k.saturating_sub(32);
        }
        out
    }

    /// Uniform integer in `[0, n)` by rejection sampling, `n > 0`.
    fn randbelow(&mut self, n: u128) -> u128 {
        let k = 128 - n.leading_zeros();
        let mut r = self.getrandbits(k);
        while r >= n {
            r = self.getrandbits(k);
        }
        r
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    ///
    /// The caller guarantees `max >= min`; transforms treat an inverted
    /// range as "leave the input alone" before ever drawing.
    pub fn randint(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(max >= min);
        let width = (i128::from(max) - i128::from(min) + 1) as u128;
        (i128::from(min) + self.randbelow(width) as i128) as i64
    }

    /// `k` distinct indices sampled uniformly from `0..n`, `k <= n`.
    ///
    /// Reproduces the reference's two-strategy sampler: a partial
    /// Fisher-Yates over a pool when the population is small, a rejection
    /// set otherwise, switching at `21 + 4^ceil(log4(3k))`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        debug_assert!(k <= n);
        let mut setsize = 21usize;
        if k > 5 {
            let exp = ((k * 3) as f64).log(4.0).ceil() as u32;
            setsize += 4usize.pow(exp);
        }

        let mut result = vec![0usize; k];
        if n <= setsize {
            let mut pool: Vec<usize> = (0..n).collect();
            for i in 0..k {
                let j = self.randbelow((n - i) as u128) as usize;
                result[i] = pool[j];
                pool[j] = pool[n - i - 1];
            }
        } else {
            let mut selected = std::collections::HashSet::new();
            for slot in result.iter_mut() {
                let mut j = self.randbelow(n as u128) as usize;
                while selected.contains(&j) {
                    j = self.randbelow(n as u128) as usize;
                }
                selected.insert(j);
                *slot = j;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    #[test]
    fn test_int_seed_vectors() {
        // Reference generator draws for randint(0, 65535).
        let expected = [(0u64, 50494i64), (1, 17611), (2, 7412), (3, 31190), (4, 30939)];
        for (seed, want) in expected {
            assert_eq!(SeededRandom::from_int(seed).randint(0, 65535), want);
        }
        assert_eq!(SeededRandom::from_int(2u64.pow(40) + 12345).randint(0, 65535), 40679);
    }

    #[test]
    fn test_text_seed_vectors() {
        let expected = [("", 59569i64), ("abc", 60319), ("hello", 46370), ("hello world", 53137)];
        for (seed, want) in expected {
            assert_eq!(SeededRandom::from_text(seed).randint(0, 65535), want);
        }
    }

    #[test]
    fn test_byte_seed_vectors() {
        let digest = Sha256::digest(b"x");
        assert_eq!(SeededRandom::from_bytes(&digest).randint(0, 65535), 64146);
        // Leading zero bytes are numerically insignificant but must not panic.
        assert_eq!(SeededRandom::from_bytes(b"\x00\x00abc").randint(0, 65535), 37157);
    }

    #[test]
    fn test_small_ranges() {
        assert_eq!(SeededRandom::from_int(0).randint(0, 0), 0);
        assert_eq!(SeededRandom::from_int(0).randint(0, 1), 1);
        assert_eq!(SeededRandom::from_int(0).randint(0, 2), 1);
        assert_eq!(SeededRandom::from_int(0).randint(0, 3), 3);
        assert_eq!(SeededRandom::from_int(0).randint(0, 4), 3);
    }

    #[test]
    fn test_wide_range_uses_multiple_words() {
        assert_eq!(SeededRandom::from_int(42).randint(5, 1_000_000_000_000), 123_005_401_506);
        assert_eq!(SeededRandom::from_text("x").randint(0, 4_294_967_295), 2_709_212_627);
    }

    #[test]
    fn test_sample_pool_branch() {
        assert_eq!(SeededRandom::from_text("s1").sample_indices(10, 3), vec![9, 8, 0]);
        assert_eq!(SeededRandom::from_text("s2").sample_indices(8, 7), vec![2, 3, 1, 5, 6, 4, 0]);
        // k > 5 raises the pool threshold past n = 30.
        assert_eq!(
            SeededRandom::from_text("s3").sample_indices(30, 6),
            vec![24, 18, 7, 3, 0, 25]
        );
    }

    #[test]
    fn test_sample_set_branch() {
        assert_eq!(SeededRandom::from_text("set-branch").sample_indices(26, 3), vec![19, 25, 17]);
        assert_eq!(SeededRandom::from_text("set2").sample_indices(100, 4), vec![20, 90, 58, 89]);
    }

    #[test]
    fn test_draw_then_sample_shares_state() {
        let mut rng = SeededRandom::from_text("hello world");
        assert_eq!(rng.randint(1, 2), 2);
        assert_eq!(rng.sample_indices(2, 2), vec![0, 1]);
    }

    #[test]
    fn test_determinism() {
        let a: Vec<i64> = (0..16).map(|_| SeededRandom::from_text("fixed").randint(0, 1000)).collect();
        assert!(a.windows(2).all(|w| w[0] == w[1]));
    }
}
