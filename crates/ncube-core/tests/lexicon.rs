use ncube_core::{Cube, Edge, EdgeLexicon};

fn pairs(lexicon: &EdgeLexicon) -> Vec<(u32, u32)> {
    lexicon.edges().iter().map(|e| (e.low(), e.high())).collect()
}

#[test]
fn three_cube_lexicon_order() {
    let lexicon = EdgeLexicon::new(Cube::new(3).unwrap());
    assert_eq!(
        pairs(&lexicon),
        vec![
            (0, 1),
            (0, 2),
            (0, 4),
            (1, 3),
            (1, 5),
            (2, 3),
            (2, 6),
            (3, 7),
            (4, 5),
            (4, 6),
            (5, 7),
            (6, 7),
        ]
    );
}

#[test]
fn lexicon_sizes() {
    for n in 1..=6 {
        let cube = Cube::new(n).unwrap();
        let lexicon = EdgeLexicon::new(cube);
        assert_eq!(lexicon.len(), n << (n - 1));
        let mut sorted = lexicon.edges().to_vec();
        sorted.sort();
        assert_eq!(sorted, lexicon.edges());
    }
}

#[test]
fn index_lookup_matches_position() {
    let lexicon = EdgeLexicon::new(Cube::new(5).unwrap());
    assert_eq!(lexicon.len(), 80);
    for (index, edge) in lexicon.edges().iter().enumerate() {
        assert_eq!(lexicon.index_of(*edge), index);
        assert_eq!(lexicon.index_of_pair(edge.high(), edge.low()), index);
        assert_eq!(1 << edge.axis(), edge.low() ^ edge.high());
    }
}

#[test]
fn edge_constructor_orders_and_validates() {
    let edge = Edge::new(6, 2).unwrap();
    assert_eq!((edge.low(), edge.high()), (2, 6));
    assert_eq!(edge.to_string(), "(2, 6)");
    assert!(Edge::new(0, 3).is_err());
    assert!(Edge::new(4, 4).is_err());
}

#[test]
fn complex_membership_and_order() {
    use ncube_core::Complex;

    let cube = Cube::new(3).unwrap();
    let complex = Complex::from_vertices(cube, [0, 1, 3]);
    assert_eq!(complex.len(), 3);
    assert!(complex.contains(3));
    assert!(!complex.contains(2));
    assert_eq!(complex.vertices().collect::<Vec<_>>(), vec![0, 1, 3]);
    assert_eq!(complex.complement().vertices().collect::<Vec<_>>(), vec![2, 4, 5, 6, 7]);
    assert_eq!(complex.to_string(), "{0, 1, 3}");
    assert!(Complex::from_vertices(cube, [1, 2]) < Complex::from_vertices(cube, [0, 3]));
    assert_eq!(Complex::from_mask(cube, u64::MAX).len(), 8);
}
