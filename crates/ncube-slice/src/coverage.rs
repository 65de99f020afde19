//! Pairwise-union coverage queries: does some `a | b` cut every edge?

use log::debug;
use ncube_core::{check_width, is_sorted, ErrorInfo, NcubeError, SliceableSet};
use rayon::prelude::*;
use rayon::ThreadPool;

/// Checks the shared preconditions and returns the common width.
fn validate(sets_1: &[SliceableSet], sets_2: &[SliceableSet]) -> Result<usize, NcubeError> {
    let width = match sets_1.first().or_else(|| sets_2.first()) {
        Some(set) => set.len(),
        None => return Ok(0),
    };
    check_width(sets_1, width, "sets_1")?;
    check_width(sets_2, width, "sets_2")?;
    if !is_sorted(sets_2) {
        let info = ErrorInfo::new("unsorted-sets", "second collection must be sorted ascending")
            .with_context("len", sets_2.len().to_string())
            .with_hint("sort the collection or use the output of expand_usr");
        return Err(NcubeError::InvalidInput(info));
    }
    Ok(width)
}

/// Whether some member of the sorted `sets_2` completes `set` to the full set.
///
/// Any partner must set the `leading_zeros(set)` bits `set` is missing at the
/// front, and such partners form a suffix of the sorted collection.
fn has_complement(set: &SliceableSet, sets_2: &[SliceableSet]) -> bool {
    let prefix = set.leading_zeros();
    sets_2
        .iter()
        .rev()
        .take_while(|candidate| candidate.has_ones_prefix(prefix))
        .any(|candidate| set.union_is_full(candidate))
}

/// Returns whether some union of a set from `sets_1` with a set from `sets_2`
/// covers every edge.
///
/// `sets_2` must be sorted ascending and every set must have the same width.
pub fn pairwise_unions_slice_cube(
    sets_1: &[SliceableSet],
    sets_2: &[SliceableSet],
) -> Result<bool, NcubeError> {
    validate(sets_1, sets_2)?;
    let found = sets_1.iter().position(|set| has_complement(set, sets_2));
    if let Some(index) = found {
        debug!("set {index} of the first collection has a complement");
    }
    Ok(found.is_some())
}

/// Same query as [`pairwise_unions_slice_cube`] with the first collection
/// split across `pool`.
pub fn pairwise_unions_slice_cube_par(
    sets_1: &[SliceableSet],
    sets_2: &[SliceableSet],
    pool: &ThreadPool,
) -> Result<bool, NcubeError> {
    validate(sets_1, sets_2)?;
    Ok(pool.install(|| sets_1.par_iter().any(|set| has_complement(set, sets_2))))
}

/// Coverage over raw packed records, one byte at a time.
pub mod bytewise {
    use ncube_core::{ErrorInfo, NcubeError, SliceableSet};

    fn leading_zeros(record: &[u8]) -> usize {
        let mut total = 0;
        for &byte in record {
            if byte != 0 {
                return total + byte.leading_zeros() as usize;
            }
            total += 8;
        }
        total
    }

    fn leading_ones(record: &[u8]) -> usize {
        let mut total = 0;
        for &byte in record {
            if byte != u8::MAX {
                return total + byte.leading_ones() as usize;
            }
            total += 8;
        }
        total
    }

    fn union_is_full(lhs: &[u8], rhs: &[u8], bits: usize) -> bool {
        let full_bytes = bits / 8;
        if lhs[..full_bytes]
            .iter()
            .zip(&rhs[..full_bytes])
            .any(|(a, b)| a | b != u8::MAX)
        {
            return false;
        }
        let tail = bits % 8;
        if tail == 0 {
            return true;
        }
        let mask = !(u8::MAX >> tail);
        (lhs[full_bytes] | rhs[full_bytes]) & mask == mask
    }

    fn check_records(bytes: &[u8], record_len: usize, label: &str) -> Result<(), NcubeError> {
        if record_len == 0 || bytes.len() % record_len != 0 {
            let info = ErrorInfo::new("record-length", "buffer is not a whole number of records")
                .with_context("collection", label)
                .with_context("bytes", bytes.len().to_string())
                .with_context("record_len", record_len.to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        Ok(())
    }

    /// Coverage query over packed record buffers of `bits`-wide sets, as
    /// produced by [`SliceableSet::to_bytes`] or read from a set file.
    ///
    /// Agrees with [`super::pairwise_unions_slice_cube`] on the decoded sets.
    pub fn pairwise_unions_slice_cube_records(
        bytes_1: &[u8],
        bytes_2: &[u8],
        bits: usize,
    ) -> Result<bool, NcubeError> {
        let record_len = SliceableSet::record_len(bits);
        check_records(bytes_1, record_len, "sets_1")?;
        check_records(bytes_2, record_len, "sets_2")?;
        let records_2: Vec<&[u8]> = bytes_2.chunks_exact(record_len).collect();
        if records_2.windows(2).any(|pair| pair[0] > pair[1]) {
            let info = ErrorInfo::new("unsorted-sets", "second collection must be sorted ascending")
                .with_context("records", records_2.len().to_string());
            return Err(NcubeError::InvalidInput(info));
        }
        for record in bytes_1.chunks_exact(record_len) {
            let prefix = leading_zeros(record).min(bits);
            for candidate in records_2.iter().rev() {
                if leading_ones(candidate).min(bits) < prefix {
                    break;
                }
                if union_is_full(record, candidate, bits) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

pub use bytewise::pairwise_unions_slice_cube_records;
