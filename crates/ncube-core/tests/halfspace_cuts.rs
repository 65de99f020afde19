use ncube_core::{low_weight_halfspace_to_sliceable_set, Cube, EdgeLexicon, Halfspace};

fn three_cube() -> (Cube, EdgeLexicon) {
    let cube = Cube::new(3).unwrap();
    (cube, EdgeLexicon::new(cube))
}

#[test]
fn diagonal_normal_at_zero_cuts_the_middle_hexagon() {
    let (_, edges) = three_cube();
    let set = low_weight_halfspace_to_sliceable_set(&[1, 1, 1], 0, &edges);
    // Edges between weight-1 and weight-2 vertices.
    assert_eq!(set.to_string(), "000111101100");
    assert_eq!(set.count(), 6);
}

#[test]
fn diagonal_normal_at_two_isolates_vertex_seven() {
    let (_, edges) = three_cube();
    let set = low_weight_halfspace_to_sliceable_set(&[1, 1, 1], 2, &edges);
    let cut: Vec<_> = set.ones().map(|i| edges.edge(i)).collect();
    assert_eq!(cut.len(), 3);
    assert!(cut.iter().all(|edge| edge.high() == 7));
}

#[test]
fn negated_diagonal_isolates_vertex_zero() {
    let (cube, edges) = three_cube();
    let halfspace = Halfspace::new(cube, vec![-1, -1, -1], 2).unwrap();
    let set = halfspace.sliceable_set(&edges);
    assert_eq!(set.to_string(), "111000000000");
    let cut: Vec<_> = set.ones().map(|i| edges.edge(i)).collect();
    assert!(cut.iter().all(|edge| edge.low() == 0));
}

#[test]
fn threshold_on_a_vertex_level_cuts_nothing() {
    let (_, edges) = three_cube();
    // Dot products are odd, so an odd threshold passes through vertices.
    let set = low_weight_halfspace_to_sliceable_set(&[1, 1, 1], 1, &edges);
    assert!(!set.any());
}

#[test]
fn axis_normal_cuts_parallel_edges() {
    let (_, edges) = three_cube();
    let set = low_weight_halfspace_to_sliceable_set(&[0, 0, 1], 0, &edges);
    assert_eq!(set.count(), 4);
    assert!(set.ones().all(|i| edges.edge(i).axis() == 2));
}

#[test]
fn normal_length_is_checked() {
    let (cube, _) = three_cube();
    assert!(Halfspace::new(cube, vec![1, 1], 0).is_err());
}
