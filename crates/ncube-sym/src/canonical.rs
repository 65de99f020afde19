use ncube_core::{Complex, SliceableSet};

use crate::action::EdgeAction;
use crate::group::SymmetryGroup;

/// Minimal image of `complex` over the whole group: the unique symmetry
/// representative of its orbit.
pub fn unique_complex(complex: &Complex, group: &SymmetryGroup) -> Complex {
    (0..group.len())
        .map(|index| group.transform_complex(index, complex))
        .fold(*complex, |min, image| min.min(image))
}

/// Minimal image of `set` under the induced edge action.
pub fn unique_sliceable_set(set: &SliceableSet, action: &EdgeAction) -> SliceableSet {
    action.orbit(set).fold(*set, |min, image| min.min(image))
}
