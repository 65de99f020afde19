//! Packed sliceable-set bit vector.
//!
//! Bit `i` (the edge with lexicon index `i`) is stored in word `i / 64` at bit
//! position `63 - i % 64`. Because the first edge sits in the most significant
//! bit, the derived ordering of the word array is the lexicographic order of the
//! bitstring `b0 b1 b2 ...`, and the big-endian bytes of the words are exactly
//! the on-disk record layout.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, NcubeError};

/// Number of `u64` words backing a set; enough for the largest supported lexicon.
pub const MAX_WORDS: usize = 3;

/// Largest supported set width in bits.
pub const MAX_BITS: usize = MAX_WORDS * 64;

/// Set of cut edges, addressed by edge-lexicon index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SliceableSet {
    len: u16,
    words: [u64; MAX_WORDS],
}

impl SliceableSet {
    /// Creates an empty set of `len` bits. Widths above [`MAX_BITS`] are
    /// clamped; use [`SliceableSet::with_width`] for unchecked input.
    pub fn empty(len: usize) -> Self {
        debug_assert!(len <= MAX_BITS, "sliceable set width {len} exceeds {MAX_BITS}");
        let len = len.min(MAX_BITS);
        Self {
            len: len as u16,
            words: [0; MAX_WORDS],
        }
    }

    /// Creates an empty set of `len` bits, rejecting widths above [`MAX_BITS`].
    pub fn with_width(len: usize) -> Result<Self, NcubeError> {
        if len > MAX_BITS {
            return Err(NcubeError::Dimension(
                ErrorInfo::new("set-width-range", "sliceable set width exceeds the supported maximum")
                    .with_context("width", len.to_string())
                    .with_context("max", MAX_BITS.to_string()),
            ));
        }
        Ok(Self::empty(len))
    }

    /// Creates the set containing every edge.
    pub fn full(len: usize) -> Self {
        let mut set = Self::empty(len);
        let count = set.word_count();
        for idx in 0..count {
            set.words[idx] = set.word_mask(idx);
        }
        set
    }

    /// Creates a set from the listed bit indices.
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::empty(len);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Width of the set in bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns whether the set has zero width.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of words carrying bits.
    pub fn word_count(&self) -> usize {
        (self.len() + 63) / 64
    }

    /// Backing words; unused trailing bits are always zero.
    pub fn words(&self) -> &[u64] {
        &self.words[..self.word_count()]
    }

    fn word_mask(&self, idx: usize) -> u64 {
        let rem = self.len() - idx * 64;
        if rem >= 64 {
            u64::MAX
        } else {
            !(u64::MAX >> rem)
        }
    }

    /// Returns whether bit `index` is set.
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.words[index / 64] & (1u64 << (63 - index % 64)) != 0
    }

    /// Sets bit `index` and returns whether it lies inside the set width.
    /// Out-of-range indices leave the set untouched.
    pub fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < self.len(), "bit {index} outside set of width {}", self.len);
        if index >= self.len() {
            return false;
        }
        self.words[index / 64] |= 1u64 << (63 - index % 64);
        true
    }

    /// Returns whether any bit is set.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns whether every bit is set.
    pub fn is_full(&self) -> bool {
        (0..self.word_count()).all(|idx| self.words[idx] == self.word_mask(idx))
    }

    /// Union of two sets of equal width.
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(self.len, other.len);
        let mut words = self.words;
        for (word, rhs) in words.iter_mut().zip(other.words.iter()) {
            *word |= rhs;
        }
        Self {
            len: self.len,
            words,
        }
    }

    /// Returns whether `self | other` is the full set, without materialising it.
    pub fn union_is_full(&self, other: &Self) -> bool {
        (0..self.word_count()).all(|idx| self.words[idx] | other.words[idx] == self.word_mask(idx))
    }

    /// Returns whether every bit of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(lhs, rhs)| lhs & !rhs == 0)
    }

    /// Returns whether every bit of `other` is also set in `self`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Number of unset bits before the first set bit (the width when empty).
    pub fn leading_zeros(&self) -> usize {
        let mut total = 0;
        for &word in self.words() {
            if word != 0 {
                return total + word.leading_zeros() as usize;
            }
            total += 64;
        }
        self.len()
    }

    /// Number of set bits before the first unset bit (the width when full).
    pub fn leading_ones(&self) -> usize {
        let mut total = 0;
        for &word in self.words() {
            if word != u64::MAX {
                return (total + word.leading_ones() as usize).min(self.len());
            }
            total += 64;
        }
        self.len()
    }

    /// Returns whether the first `prefix` bits are all set.
    ///
    /// This is the packed fast path of the coverage scan: each word is OR-ed with
    /// a mask covering the bits past the prefix and compared to all-ones.
    pub fn has_ones_prefix(&self, prefix: usize) -> bool {
        let prefix = prefix.min(self.len());
        let mut remaining = prefix;
        for &word in self.words() {
            if remaining == 0 {
                return true;
            }
            let mask = u64::MAX.checked_shr(remaining as u32).unwrap_or(0);
            if word | mask != u64::MAX {
                return false;
            }
            remaining = remaining.saturating_sub(64);
        }
        true
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words()
            .iter()
            .enumerate()
            .flat_map(|(idx, &word)| WordBits { word, base: idx * 64 })
    }

    /// Number of bytes in the packed record of a `len`-bit set.
    pub fn record_len(len: usize) -> usize {
        (len + 7) / 8
    }

    /// Packs the set into its record bytes (most significant bit first).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.word_count() * 8);
        for word in self.words() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes.truncate(Self::record_len(self.len()));
        bytes
    }

    /// Unpacks a record produced by [`SliceableSet::to_bytes`].
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self, NcubeError> {
        if len > MAX_BITS || bytes.len() != Self::record_len(len) {
            let info = ErrorInfo::new("record-length", "record does not match set width")
                .with_context("bytes", bytes.len().to_string())
                .with_context("bits", len.to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        let mut set = Self::empty(len);
        for (idx, chunk) in bytes.chunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            set.words[idx] = u64::from_be_bytes(buf);
        }
        if (0..set.word_count()).any(|idx| set.words[idx] & !set.word_mask(idx) != 0) {
            let info = ErrorInfo::new("record-padding", "padding bits past the set width are set")
                .with_context("bits", len.to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        Ok(set)
    }

    /// Parses a bitstring of `0`/`1` characters, edge 0 first.
    pub fn from_bitstring(text: &str) -> Result<Self, NcubeError> {
        if text.len() > MAX_BITS {
            let info = ErrorInfo::new("bitstring-width", "bitstring is too wide")
                .with_context("bits", text.len().to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        let mut set = Self::empty(text.len());
        for (index, ch) in text.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    set.insert(index);
                }
                other => {
                    let info = ErrorInfo::new("bitstring-char", "bitstring may only hold 0 and 1")
                        .with_context("char", other.to_string())
                        .with_context("position", index.to_string());
                    return Err(NcubeError::InvalidInput(info));
                }
            }
        }
        Ok(set)
    }
}

struct WordBits {
    word: u64,
    base: usize,
}

impl Iterator for WordBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let offset = self.word.leading_zeros() as usize;
        self.word &= !(1u64 << (63 - offset));
        Some(self.base + offset)
    }
}

impl BitOr for SliceableSet {
    type Output = SliceableSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl BitOrAssign for SliceableSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(&rhs);
    }
}

impl fmt::Display for SliceableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len() {
            f.write_str(if self.get(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for SliceableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SliceableSet({self})")
    }
}

impl From<SliceableSet> for String {
    fn from(value: SliceableSet) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for SliceableSet {
    type Error = NcubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SliceableSet::from_bitstring(&value)
    }
}
