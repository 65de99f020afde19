//! Sliceable sets induced by cut complexes, their symmetry representatives
//! and the maximal sets of their orbits.

use std::collections::BTreeSet;

use log::debug;
use ncube_core::{Complex, EdgeLexicon, SliceableSet};
use ncube_sym::{unique_sliceable_set, EdgeAction};
use rayon::prelude::*;

use crate::antichain::maximal_antichain;

/// Edges with exactly one endpoint in `complex`.
pub fn complex_to_sliceable_set(complex: &Complex, lexicon: &EdgeLexicon) -> SliceableSet {
    let mut set = SliceableSet::empty(lexicon.len());
    for (index, edge) in lexicon.edges().iter().enumerate() {
        if complex.contains(edge.low()) != complex.contains(edge.high()) {
            set.insert(index);
        }
    }
    set
}

/// Unique symmetry representatives of the sets cut by `complexes`, sorted and
/// deduplicated.
pub fn complexes_to_usr(
    complexes: &[Complex],
    lexicon: &EdgeLexicon,
    action: &EdgeAction,
) -> Vec<SliceableSet> {
    let usr: BTreeSet<SliceableSet> = complexes
        .iter()
        .map(|complex| complex_to_sliceable_set(complex, lexicon))
        .filter(SliceableSet::any)
        .map(|set| unique_sliceable_set(&set, action))
        .collect();
    debug!("{} complexes give {} representatives", complexes.len(), usr.len());
    usr.into_iter().collect()
}

/// Every image of every representative, reduced to the maximal antichain.
pub fn expand_usr(usr: &[SliceableSet], action: &EdgeAction) -> Vec<SliceableSet> {
    let images: BTreeSet<SliceableSet> = usr.iter().flat_map(|set| action.orbit(set)).collect();
    let mss = maximal_antichain(images);
    debug!("{} representatives expand to {} maximal sets", usr.len(), mss.len());
    mss
}

/// Maximal sliceable sets of all cuts given by `complexes`.
pub fn complexes_to_mss(
    complexes: &[Complex],
    lexicon: &EdgeLexicon,
    action: &EdgeAction,
) -> Vec<SliceableSet> {
    expand_usr(&complexes_to_usr(complexes, lexicon, action), action)
}

/// Unique representatives of every union `a | b` with `a` from `sets_a` and `b`
/// from `sets_b`, sorted and deduplicated.
///
/// Runs on the current rayon pool; each worker builds its own set of
/// representatives and the partial results are merged at the end.
pub fn pairwise_unions(
    sets_a: &[SliceableSet],
    sets_b: &[SliceableSet],
    action: &EdgeAction,
) -> Vec<SliceableSet> {
    let unions = sets_a
        .par_iter()
        .fold(BTreeSet::new, |mut acc, a| {
            let raw: BTreeSet<SliceableSet> = sets_b.iter().map(|b| a.union(b)).collect();
            for union in raw {
                acc.insert(unique_sliceable_set(&union, action));
            }
            acc
        })
        .reduce(BTreeSet::new, |mut lhs, rhs| {
            lhs.extend(rhs);
            lhs
        });
    debug!(
        "{} x {} unions give {} representatives",
        sets_a.len(),
        sets_b.len(),
        unions.len()
    );
    unions.into_iter().collect()
}

/// Like [`pairwise_unions`], but for each `a` only the inclusion-maximal unions
/// `a | b` are canonicalised. The result is smaller while every union it drops
/// lies inside one it keeps, so expanding it with [`expand_usr`] yields the
/// same maximal sets and the coverage query gives the same answer.
pub fn maximal_pairwise_unions(
    sets_a: &[SliceableSet],
    sets_b: &[SliceableSet],
    action: &EdgeAction,
) -> Vec<SliceableSet> {
    let unions = sets_a
        .par_iter()
        .fold(BTreeSet::new, |mut acc, a| {
            let raw = maximal_antichain(sets_b.iter().map(|b| a.union(b)));
            for union in raw {
                acc.insert(unique_sliceable_set(&union, action));
            }
            acc
        })
        .reduce(BTreeSet::new, |mut lhs, rhs| {
            lhs.extend(rhs);
            lhs
        });
    debug!(
        "{} x {} maximal unions give {} representatives",
        sets_a.len(),
        sets_b.len(),
        unions.len()
    );
    unions.into_iter().collect()
}
