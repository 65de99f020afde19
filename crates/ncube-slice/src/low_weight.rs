//! Halfspaces with small integer normals and the maximal sets they cut.

use std::fmt;
use std::path::Path;

use log::{debug, info};
use ncube_core::{low_weight_halfspace_to_sliceable_set, EdgeLexicon, Halfspace, NcubeError, SliceableSet};

use crate::antichain::Antichain;
use crate::persist::write_text_dump;

/// Odometer over `{-1, 1}^n`: starts at all `-1`, advances the last coordinate
/// first and ends after all `1`.
#[derive(Debug, Clone)]
pub struct OneWeightNormals {
    next: Option<Vec<i32>>,
}

impl OneWeightNormals {
    /// Iterator over the `2^n` normals of length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            next: Some(vec![-1; n]),
        }
    }
}

impl Iterator for OneWeightNormals {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Vec<i32>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for weight in following.iter_mut().rev() {
            if *weight == -1 {
                *weight = 1;
                self.next = Some(following);
                break;
            }
            *weight = -1;
        }
        Some(current)
    }
}

/// Odometer over `{-max, ..., max}^n` in mixed radix, last coordinate first.
#[derive(Debug, Clone)]
pub struct LowWeightNormals {
    max: i32,
    next: Option<Vec<i32>>,
}

impl LowWeightNormals {
    /// Iterator over the `(2 * max + 1)^n` normals of length `n`.
    pub fn new(n: usize, max: i32) -> Self {
        Self {
            max,
            next: Some(vec![-max; n]),
        }
    }
}

impl Iterator for LowWeightNormals {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Vec<i32>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        for weight in following.iter_mut().rev() {
            if *weight == self.max {
                *weight = -self.max;
            } else {
                *weight += 1;
                self.next = Some(following);
                break;
            }
        }
        Some(current)
    }
}

/// A non-degenerate halfspace together with the edges it cuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfspaceRecord {
    /// Edges cut by the halfspace.
    pub set: SliceableSet,
    /// Normal and threshold.
    pub halfspace: Halfspace,
}

impl fmt::Display for HalfspaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.set, self.halfspace)
    }
}

fn collect_records(
    normals: impl Iterator<Item = Vec<i32>>,
    thresholds: &[i32],
    lexicon: &EdgeLexicon,
) -> Vec<HalfspaceRecord> {
    let mut records = Vec::new();
    for normal in normals {
        for &threshold in thresholds {
            let set = low_weight_halfspace_to_sliceable_set(&normal, threshold, lexicon);
            if set.any() {
                records.push(HalfspaceRecord {
                    set,
                    halfspace: Halfspace {
                        normal: normal.clone(),
                        threshold,
                    },
                });
            }
        }
    }
    records
}

fn collect_mss(
    normals: impl Iterator<Item = Vec<i32>>,
    thresholds: &[i32],
    lexicon: &EdgeLexicon,
) -> Vec<SliceableSet> {
    let mut antichain = Antichain::new();
    for normal in normals {
        for &threshold in thresholds {
            let set = low_weight_halfspace_to_sliceable_set(&normal, threshold, lexicon);
            if set.any() {
                antichain.insert(set);
            }
        }
    }
    debug!("low weight antichain holds {} sets", antichain.len());
    antichain.into_sorted()
}

fn low_weight_thresholds(max: i32, n: usize) -> Vec<i32> {
    (0..max * n as i32).collect()
}

/// Maximal sets cut by halfspaces with normals in `{-1, 1}^n` and one of the
/// given thresholds, sorted ascending.
pub fn compute_one_weight_mss(thresholds: &[i32], lexicon: &EdgeLexicon) -> Vec<SliceableSet> {
    let n = lexicon.cube().dimension();
    collect_mss(OneWeightNormals::new(n), thresholds, lexicon)
}

/// Maximal sets cut by halfspaces with normals in `{-max, ..., max}^n` and
/// thresholds `0..max * n`, sorted ascending.
pub fn compute_low_weight_mss(max: i32, lexicon: &EdgeLexicon) -> Vec<SliceableSet> {
    let n = lexicon.cube().dimension();
    collect_mss(LowWeightNormals::new(n, max), &low_weight_thresholds(max, n), lexicon)
}

/// Every non-degenerate one-weight halfspace with the given thresholds.
pub fn one_weight_halfspaces(thresholds: &[i32], lexicon: &EdgeLexicon) -> Vec<HalfspaceRecord> {
    let n = lexicon.cube().dimension();
    collect_records(OneWeightNormals::new(n), thresholds, lexicon)
}

/// Every non-degenerate low-weight halfspace with normals bounded by `max`.
pub fn low_weight_halfspaces(max: i32, lexicon: &EdgeLexicon) -> Vec<HalfspaceRecord> {
    let n = lexicon.cube().dimension();
    collect_records(LowWeightNormals::new(n, max), &low_weight_thresholds(max, n), lexicon)
}

/// Writes the text dump of [`one_weight_halfspaces`] to `path`; returns the
/// number of lines.
pub fn write_one_weight_halfspaces_to_file(
    thresholds: &[i32],
    lexicon: &EdgeLexicon,
    path: &Path,
) -> Result<usize, NcubeError> {
    let records = one_weight_halfspaces(thresholds, lexicon);
    write_text_dump(path, &records)?;
    info!("wrote {} one-weight halfspaces to {}", records.len(), path.display());
    Ok(records.len())
}

/// Writes the text dump of [`low_weight_halfspaces`] to `path`; returns the
/// number of lines.
pub fn write_low_weight_halfspaces_to_file(
    max: i32,
    lexicon: &EdgeLexicon,
    path: &Path,
) -> Result<usize, NcubeError> {
    let records = low_weight_halfspaces(max, lexicon);
    write_text_dump(path, &records)?;
    info!("wrote {} low-weight halfspaces to {}", records.len(), path.display());
    Ok(records.len())
}
