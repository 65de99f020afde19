use ncube_core::{SliceableSet, MAX_BITS};
use proptest::prelude::*;

#[test]
fn eighty_bit_record_layout() {
    let mut set = SliceableSet::empty(80);
    set.insert(0);
    set.insert(7);
    set.insert(63);
    set.insert(64);
    set.insert(79);
    let bytes = set.to_bytes();
    assert_eq!(bytes.len(), 10);
    assert_eq!(bytes[0], 0b1000_0001);
    assert_eq!(bytes[7], 0b0000_0001);
    assert_eq!(bytes[8], 0b1000_0000);
    assert_eq!(bytes[9], 0b0000_0001);
    assert_eq!(SliceableSet::from_bytes(&bytes, 80).unwrap(), set);
}

#[test]
fn padding_bits_are_rejected() {
    let bytes = [0u8, 0b0000_0001];
    assert!(SliceableSet::from_bytes(&bytes, 12).is_err());
    assert!(SliceableSet::from_bytes(&bytes, 16).is_ok());
    assert!(SliceableSet::from_bytes(&bytes, 20).is_err());
}

#[test]
fn full_and_leading_counts() {
    let full = SliceableSet::full(80);
    assert!(full.is_full());
    assert_eq!(full.count(), 80);
    assert_eq!(full.leading_ones(), 80);
    assert_eq!(full.leading_zeros(), 0);
    let empty = SliceableSet::empty(80);
    assert_eq!(empty.leading_zeros(), 80);
    assert_eq!(empty.leading_ones(), 0);
    assert!(!empty.any());
    let late = SliceableSet::from_indices(80, [70]);
    assert_eq!(late.leading_zeros(), 70);
}

#[test]
fn ones_prefix_crosses_word_boundary() {
    let set = SliceableSet::from_indices(80, 0..70);
    assert!(set.has_ones_prefix(0));
    assert!(set.has_ones_prefix(64));
    assert!(set.has_ones_prefix(70));
    assert!(!set.has_ones_prefix(71));
    assert!(!set.has_ones_prefix(80));
}

#[test]
fn union_and_subset() {
    let a = SliceableSet::from_bitstring("1100").unwrap();
    let b = SliceableSet::from_bitstring("0011").unwrap();
    assert!(a.union_is_full(&b));
    assert!((a | b).is_full());
    assert!(a.is_subset_of(&(a | b)));
    assert!(!(a | b).is_subset_of(&a));
    assert!((a | b).is_superset_of(&b));
}

fn arb_set(len: usize) -> impl Strategy<Value = SliceableSet> {
    proptest::collection::vec(any::<bool>(), len).prop_map(move |bits| {
        SliceableSet::from_indices(len, bits.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i))
    })
}

proptest! {
    #[test]
    fn ordering_matches_bitstring_order(a in arb_set(80), b in arb_set(80)) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    #[test]
    fn ones_prefix_agrees_with_leading_ones(a in arb_set(96), prefix in 0usize..=96) {
        prop_assert_eq!(a.has_ones_prefix(prefix), a.leading_ones() >= prefix);
    }

    #[test]
    fn bytes_round_trip(a in arb_set(MAX_BITS)) {
        let bytes = a.to_bytes();
        prop_assert_eq!(SliceableSet::from_bytes(&bytes, MAX_BITS).unwrap(), a);
        prop_assert_eq!(SliceableSet::from_bitstring(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn ones_iterates_set_bits(a in arb_set(80)) {
        let listed: Vec<usize> = a.ones().collect();
        let expected: Vec<usize> = (0..80).filter(|&i| a.get(i)).collect();
        prop_assert_eq!(listed, expected);
    }
}

#[test]
fn oversized_widths_are_rejected_without_panicking() {
    let err = SliceableSet::with_width(MAX_BITS + 1).unwrap_err();
    assert!(matches!(err, ncube_core::NcubeError::Dimension(ref info) if info.code == "set-width-range"));
    let set = SliceableSet::with_width(MAX_BITS).unwrap();
    assert_eq!(set.len(), MAX_BITS);
    assert!(!SliceableSet::full(12).get(12));
    assert!(!SliceableSet::full(12).get(MAX_BITS + 5));
}
