use ncube_core::{Cube, EdgeLexicon, Halfspace, NcubeError, SliceableSet};

#[test]
fn sliceable_set_serializes_as_bitstring() {
    let set = SliceableSet::from_indices(12, [0, 3, 11]);
    let json = serde_json::to_string(&set).expect("serialize");
    assert_eq!(json, "\"100100000001\"");
    let decoded: SliceableSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, set);
}

#[test]
fn bad_bitstring_is_rejected() {
    let err = serde_json::from_str::<SliceableSet>("\"10x1\"");
    assert!(err.is_err());
}

#[test]
fn halfspace_round_trip_json() {
    let cube = Cube::new(3).unwrap();
    let halfspace = Halfspace::new(cube, vec![1, -1, 1], 0).unwrap();
    let json = serde_json::to_string_pretty(&halfspace).expect("serialize");
    let decoded: Halfspace = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, halfspace);
    let edges = EdgeLexicon::new(cube);
    assert_eq!(decoded.sliceable_set(&edges), halfspace.sliceable_set(&edges));
}

#[test]
fn cube_deserialization_validates_dimension() {
    let cube: Cube = serde_json::from_str("5").expect("valid dimension");
    assert_eq!(cube.dimension(), 5);
    assert!(serde_json::from_str::<Cube>("9").is_err());
}

#[test]
fn error_round_trip_json() {
    let err = Cube::new(9).unwrap_err();
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Dimension\""));
    let decoded: NcubeError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
