use std::collections::BTreeSet;

use ncube_core::{low_weight_halfspace_to_sliceable_set, Cube, EdgeLexicon, SliceableSet};
use ncube_sym::{transform_vertex, unique_sliceable_set, EdgeAction, SymmetryGroup};

fn setup(n: usize) -> (EdgeLexicon, SymmetryGroup, EdgeAction) {
    let cube = Cube::new(n).unwrap();
    let lexicon = EdgeLexicon::new(cube);
    let group = SymmetryGroup::new(cube);
    let action = EdgeAction::new(&group, &lexicon);
    (lexicon, group, action)
}

#[test]
fn edge_images_follow_vertex_images() {
    let (lexicon, group, action) = setup(3);
    for (index, sym) in group.symmetries().iter().enumerate() {
        let mut seen = BTreeSet::new();
        for (edge_index, edge) in lexicon.edges().iter().enumerate() {
            let image = lexicon.edge(action.edge_image(index, edge_index));
            let u = transform_vertex(sym, edge.low());
            let v = transform_vertex(sym, edge.high());
            assert_eq!((image.low(), image.high()), (u.min(v), u.max(v)));
            seen.insert(image);
        }
        assert_eq!(seen.len(), lexicon.len());
    }
}

#[test]
fn orbit_of_the_middle_hexagon() {
    let (lexicon, _, action) = setup(3);
    let hexagon = low_weight_halfspace_to_sliceable_set(&[1, 1, 1], 0, &lexicon);
    let orbit: BTreeSet<SliceableSet> = action.orbit(&hexagon).collect();
    // One hexagon per main diagonal.
    assert_eq!(orbit.len(), 4);
    assert!(orbit.iter().all(|set| set.count() == 6));
    let canonical = unique_sliceable_set(&hexagon, &action);
    assert_eq!(canonical, *orbit.iter().next().unwrap());
    for image in &orbit {
        assert_eq!(unique_sliceable_set(image, &action), canonical);
    }
}

#[test]
fn canonical_set_is_idempotent() {
    let (lexicon, _, action) = setup(4);
    let set = low_weight_halfspace_to_sliceable_set(&[2, 1, -1, 1], 1, &lexicon);
    let canonical = unique_sliceable_set(&set, &action);
    assert!(canonical <= set);
    assert_eq!(unique_sliceable_set(&canonical, &action), canonical);
    assert_eq!(canonical.count(), set.count());
}
