use nalgebra::{DMatrix, DVector};
use ncube_complex::lp::solve_geq;
use ncube_complex::{ComplexOracle, ConnectedSides, LinearSeparability, OracleKind};
use ncube_core::{Complex, Cube, NcubeError};

fn cube(n: usize) -> Cube {
    Cube::new(n).unwrap()
}

#[test]
fn lp_finds_a_witness_for_a_feasible_system() {
    // x >= 1, y >= 2, x + y >= 4 (free variables)
    let a = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let b = DVector::from_vec(vec![1.0, 2.0, 4.0]);
    let y = solve_geq(&a, &b).unwrap().expect("feasible");
    let lhs = &a * &y;
    for i in 0..3 {
        assert!(lhs[i] >= b[i] - 1e-7, "row {i}: {} < {}", lhs[i], b[i]);
    }
}

#[test]
fn lp_handles_negative_solutions() {
    // -x >= 3 forces x <= -3
    let a = DMatrix::from_row_slice(1, 1, &[-1.0]);
    let b = DVector::from_vec(vec![3.0]);
    let y = solve_geq(&a, &b).unwrap().expect("feasible");
    assert!(y[0] <= -3.0 + 1e-7);
}

#[test]
fn lp_detects_infeasibility() {
    // x >= 1 and -x >= 1
    let a = DMatrix::from_row_slice(2, 1, &[1.0, -1.0]);
    let b = DVector::from_vec(vec![1.0, 1.0]);
    assert!(solve_geq(&a, &b).unwrap().is_none());
}

#[test]
fn lp_rejects_malformed_systems() {
    let a = DMatrix::from_row_slice(2, 1, &[1.0, -1.0]);
    let short = DVector::from_vec(vec![1.0]);
    assert!(matches!(solve_geq(&a, &short), Err(NcubeError::Dimension(_))));
    let negative = DVector::from_vec(vec![1.0, -1.0]);
    assert!(matches!(solve_geq(&a, &negative), Err(NcubeError::InvalidInput(_))));
}

#[test]
fn faces_stars_and_subcubes_are_separable() {
    let c3 = cube(3);
    let face = Complex::from_vertices(c3, [0, 1, 2, 3]);
    let star = Complex::from_vertices(c3, [0, 1, 2, 4]);
    let corner = Complex::from_vertices(c3, [5]);
    for complex in [face, star, corner] {
        assert!(LinearSeparability.is_complex(&complex), "{complex} should be separable");
        let (normal, offset) = LinearSeparability::separating_halfspace(&complex).unwrap();
        assert_eq!(normal.len(), 3);
        assert!(offset.is_finite());
    }
    let c5 = cube(5);
    let subcube = Complex::from_vertices(c5, (0..32).filter(|v| v & 0b10001 == 0));
    assert!(LinearSeparability.is_complex(&subcube));
}

#[test]
fn twisted_path_and_diagonal_are_not_separable() {
    let c3 = cube(3);
    let twisted = Complex::from_vertices(c3, [0, 1, 3, 7]);
    assert!(!LinearSeparability.is_complex(&twisted));
    let diagonal = Complex::from_vertices(c3, [0, 3]);
    assert!(!LinearSeparability.is_complex(&diagonal));
    // The twisted path still splits the cube into two connected halves.
    assert!(ConnectedSides.is_complex(&twisted));
    assert!(!ConnectedSides.is_complex(&diagonal));
}

#[test]
fn parity_set_is_not_separable() {
    let c4 = cube(4);
    let even = Complex::from_vertices(c4, (0..16).filter(|v: &u32| v.count_ones() % 2 == 0));
    assert!(!LinearSeparability.is_complex(&even));
    assert!(!OracleKind::Connected.is_complex(&even));
}

#[test]
fn closures_act_as_oracles() {
    let small = |complex: &Complex| complex.len() <= 2;
    let c3 = cube(3);
    assert!(small.is_complex(&Complex::from_vertices(c3, [0, 1])));
    assert!(!small.is_complex(&Complex::from_vertices(c3, [0, 1, 3])));
}

#[test]
fn oracle_kind_serializes_in_kebab_case() {
    assert_eq!(serde_json::to_string(&OracleKind::Separable).unwrap(), "\"separable\"");
    let kind: OracleKind = serde_json::from_str("\"connected\"").unwrap();
    assert_eq!(kind, OracleKind::Connected);
}

mod invariance {
    use ncube_complex::{ComplexOracle, ConnectedSides, LinearSeparability};
    use ncube_core::{Complex, Cube, NcubeError};
    use ncube_sym::SymmetryGroup;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn oracles_are_symmetry_invariant(mask in any::<u16>(), index in 0usize..384) {
            let cube = Cube::new(4).unwrap();
            let group = SymmetryGroup::new(cube);
            let complex = Complex::from_mask(cube, u64::from(mask));
            let image = group.transform_complex(index, &complex);
            prop_assert_eq!(LinearSeparability.is_complex(&complex), LinearSeparability.is_complex(&image));
            prop_assert_eq!(ConnectedSides.is_complex(&complex), ConnectedSides.is_complex(&image));
            prop_assert_eq!(
                LinearSeparability.is_complex(&complex),
                LinearSeparability.is_complex(&complex.complement())
            );
        }
    }
}
