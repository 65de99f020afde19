use log::debug;
use ncube_core::{Cube, EdgeLexicon, SliceableSet};

use crate::antichain::maximal_antichain;
use crate::low_weight::compute_one_weight_mss;

/// Smallest `k` such that a union of `k` members of `sets` cuts every edge of
/// the lexicon.
///
/// Level `k` holds the maximal unions of `k` sets. Returns `None` when
/// `max_rounds` levels are exhausted or a level stops growing.
pub fn combine_sliceable_sets(
    sets: &[SliceableSet],
    lexicon: &EdgeLexicon,
    max_rounds: usize,
) -> Option<usize> {
    let base = maximal_antichain(
        sets.iter()
            .copied()
            .filter(|set| set.any() && set.len() == lexicon.len()),
    );
    if base.is_empty() {
        return None;
    }
    let mut level = base.clone();
    for k in 1..=max_rounds {
        if level.iter().any(SliceableSet::is_full) {
            return Some(k);
        }
        if k == max_rounds {
            break;
        }
        let next = maximal_antichain(
            level
                .iter()
                .flat_map(|lhs| base.iter().map(move |rhs| lhs.union(rhs))),
        );
        debug!("level {} holds {} maximal unions", k + 1, next.len());
        if next == level {
            return None;
        }
        level = next;
    }
    None
}

/// Number of one-weight halfspaces with the given thresholds needed to cut
/// every edge of `cube`.
pub fn slice_cube_one_weight(distances: &[i32], cube: Cube) -> Option<usize> {
    let lexicon = EdgeLexicon::new(cube);
    let sets = compute_one_weight_mss(distances, &lexicon);
    combine_sliceable_sets(&sets, &lexicon, lexicon.len())
}
