//! Arbitrary-precision integers in the host's word form.
//!
//! The host hands bigints across the boundary as a sign bit plus a list of
//! little-endian 64-bit magnitude words. [`BigInt`] keeps exactly that shape so
//! values cross the bridge without re-encoding, and exposes the same
//! `(value, lossless)` narrowing the host API reports.

use std::fmt;

/// A host bigint: sign bit plus little-endian magnitude words.
///
/// Always normalized: no trailing zero words, and zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    words: Vec<u64>,
}

impl BigInt {
    /// Build from a sign bit and little-endian magnitude words.
    pub fn from_words(negative: bool, words: impl Into<Vec<u64>>) -> Self {
        let mut words = words.into();
        while words.last() == Some(&0) {
            words.pop();
        }
        let negative = negative && !words.is_empty();
        Self { negative, words }
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_words(false, vec![value])
    }

    pub fn from_i64(value: i64) -> Self {
        Self::from_words(value < 0, vec![value.unsigned_abs()])
    }

    pub fn from_u128(value: u128) -> Self {
        Self::from_words(false, vec![value as u64, (value >> 64) as u64])
    }

    pub fn from_i128(value: i128) -> Self {
        let magnitude = value.unsigned_abs();
        Self::from_words(value < 0, vec![magnitude as u64, (magnitude >> 64) as u64])
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// Magnitude words, least significant first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    fn low_word(&self) -> u64 {
        self.words.first().copied().unwrap_or(0)
    }

    /// Narrow to `u64`, reporting whether the result is exact.
    ///
    /// The value is the low 64 bits of the two's-complement representation,
    /// so negative inputs wrap. Lossless only for `0..=u64::MAX`.
    pub fn get_u64(&self) -> (u64, bool) {
        let low = self.low_word();
        if self.negative {
            (low.wrapping_neg(), false)
        } else {
            (low, self.words.len() <= 1)
        }
    }

    /// Narrow to `i64`, reporting whether the result is exact.
    pub fn get_i64(&self) -> (i64, bool) {
        let low = self.low_word();
        let single = self.words.len() <= 1;
        if self.negative {
            ((low as i64).wrapping_neg(), single && low <= 1 << 63)
        } else {
            (low as i64, single && low <= i64::MAX as u64)
        }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        // Repeated division by 10^19, the largest power of ten below 2^64.
        const CHUNK: u64 = 10_000_000_000_000_000_000;
        let mut magnitude = self.words.clone();
        let mut chunks = Vec::new();
        while !magnitude.is_empty() {
            let mut rem: u128 = 0;
            for word in magnitude.iter_mut().rev() {
                let acc = (rem << 64) | *word as u128;
                *word = (acc / CHUNK as u128) as u64;
                rem = acc % CHUNK as u128;
            }
            while magnitude.last() == Some(&0) {
                magnitude.pop();
            }
            chunks.push(rem as u64);
        }

        if self.negative {
            f.write_str("-")?;
        }
        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for chunk in iter {
            write!(f, "{:019}", chunk)?;
        }
        Ok(())
    }
}
