use ncube_core::SliceableSet;

/// Collection of sliceable sets in which no member contains another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Antichain {
    sets: Vec<SliceableSet>,
}

impl Antichain {
    /// Creates an empty antichain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `set` unless a member already contains it (equal sets included).
    /// Members contained in `set` are dropped. Returns whether `set` was kept.
    pub fn insert(&mut self, set: SliceableSet) -> bool {
        if self.sets.iter().any(|kept| kept.is_superset_of(&set)) {
            return false;
        }
        self.sets.retain(|kept| !kept.is_subset_of(&set));
        self.sets.push(set);
        true
    }

    /// Folds another antichain into this one.
    pub fn merge(&mut self, other: Antichain) {
        for set in other.sets {
            self.insert(set);
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns whether the antichain has no members.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Members in insertion order.
    pub fn as_slice(&self) -> &[SliceableSet] {
        &self.sets
    }

    /// Members sorted ascending.
    pub fn into_sorted(self) -> Vec<SliceableSet> {
        let mut sets = self.sets;
        sets.sort_unstable();
        sets
    }
}

impl Extend<SliceableSet> for Antichain {
    fn extend<I: IntoIterator<Item = SliceableSet>>(&mut self, iter: I) {
        for set in iter {
            self.insert(set);
        }
    }
}

impl FromIterator<SliceableSet> for Antichain {
    fn from_iter<I: IntoIterator<Item = SliceableSet>>(iter: I) -> Self {
        let mut antichain = Antichain::new();
        antichain.extend(iter);
        antichain
    }
}

/// Reduces `sets` to its inclusion-maximal members, sorted ascending and
/// deduplicated.
///
/// Candidates are visited by decreasing popcount, so a candidate can only be
/// contained in a member kept earlier with strictly more bits.
pub fn maximal_antichain(sets: impl IntoIterator<Item = SliceableSet>) -> Vec<SliceableSet> {
    let mut candidates: Vec<(usize, SliceableSet)> =
        sets.into_iter().map(|set| (set.count(), set)).collect();
    candidates.sort_unstable_by(|lhs, rhs| rhs.0.cmp(&lhs.0).then(lhs.1.cmp(&rhs.1)));
    candidates.dedup_by(|next, prev| next.1 == prev.1);

    let mut kept: Vec<(usize, SliceableSet)> = Vec::new();
    for (count, set) in candidates {
        let covered = kept
            .iter()
            .take_while(|(kept_count, _)| *kept_count > count)
            .any(|(_, kept_set)| set.is_subset_of(kept_set));
        if !covered {
            kept.push((count, set));
        }
    }
    let mut result: Vec<SliceableSet> = kept.into_iter().map(|(_, set)| set).collect();
    result.sort_unstable();
    result
}
