use std::fs;

use ncube_core::{Cube, EdgeLexicon, NcubeError, SliceableSet};
use ncube_slice::{
    compute_one_weight_mss, manifest_path, read_sets, read_text_dump, verify_manifest,
    write_one_weight_halfspaces_to_file, write_sets, write_sets_with_manifest,
};
use tempfile::tempdir;

fn five_cube_sets() -> (Cube, Vec<SliceableSet>) {
    let cube = Cube::new(5).unwrap();
    let lexicon = EdgeLexicon::new(cube);
    (cube, compute_one_weight_mss(&[0, 1, 2, 3], &lexicon))
}

#[test]
fn binary_records_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/5_mss.bin");
    let (_, sets) = five_cube_sets();
    assert!(!sets.is_empty());
    write_sets(&path, &sets).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len() as usize, sets.len() * 10);
    assert_eq!(read_sets(&path, 80).unwrap(), sets);
}

#[test]
fn record_order_is_preserved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unsorted.bin");
    let sets: Vec<_> = ["1100", "0011", "1000"]
        .iter()
        .map(|text| SliceableSet::from_bitstring(text).unwrap())
        .collect();
    write_sets(&path, &sets).unwrap();
    assert_eq!(read_sets(&path, 4).unwrap(), sets);
}

#[test]
fn truncated_file_is_invalid_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, [0u8; 15]).unwrap();
    let err = read_sets(&path, 80).unwrap_err();
    assert!(matches!(err, NcubeError::InvalidInput(ref info) if info.code == "record-length"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_sets(&dir.path().join("absent.bin"), 80).unwrap_err();
    assert!(matches!(err, NcubeError::Io(ref info) if info.code == "open-file"));
}

#[test]
fn manifest_detects_tampering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("5_usr_2.bin");
    let (cube, sets) = five_cube_sets();
    let manifest = write_sets_with_manifest(&path, cube, &sets).unwrap();
    assert_eq!(manifest.record_len, 10);
    assert_eq!(manifest.record_count, sets.len());
    assert!(manifest.sorted);
    assert_eq!(manifest.sha256.len(), 64);
    assert!(manifest_path(&path).ends_with("5_usr_2.bin.json"));
    assert_eq!(verify_manifest(&path).unwrap(), manifest);

    let mut bytes = fs::read(&path).unwrap();
    bytes[0] ^= 0x80;
    fs::write(&path, &bytes).unwrap();
    let err = verify_manifest(&path).unwrap_err();
    assert!(matches!(err, NcubeError::InvalidInput(ref info) if info.code == "manifest-digest"));
}

#[test]
fn text_dump_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump/2_one_weight.txt");
    let lexicon = EdgeLexicon::new(Cube::new(2).unwrap());
    let lines = write_one_weight_halfspaces_to_file(&[0, 1], &lexicon, &path).unwrap();
    assert_eq!(lines, 4);
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "0011 [1 1] 1\n0101 [-1 1] 1\n1010 [1 -1] 1\n1100 [-1 -1] 1\n"
    );
    let records = read_text_dump(&path).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[2].halfspace.normal, vec![1, -1]);
    assert_eq!(records[2].set.to_string(), "1010");
}

#[test]
fn malformed_dump_line_reports_its_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "0011 [1 1] 1\n0101 [-1 x] 1\n").unwrap();
    let err = read_text_dump(&path).unwrap_err();
    match err {
        NcubeError::InvalidInput(info) => {
            assert_eq!(info.code, "dump-line");
            assert_eq!(info.context.get("line").map(String::as_str), Some("2"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}
