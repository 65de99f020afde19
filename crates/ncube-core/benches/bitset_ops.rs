use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ncube_core::{low_weight_halfspace_to_sliceable_set, Cube, EdgeLexicon, SliceableSet};

fn bitset_bench(c: &mut Criterion) {
    let edges = EdgeLexicon::new(Cube::new(5).unwrap());
    let a = low_weight_halfspace_to_sliceable_set(&[1, 1, 1, 1, 1], 0, &edges);
    let b = low_weight_halfspace_to_sliceable_set(&[1, -1, 1, -1, 1], 2, &edges);

    c.bench_function("union_is_full", |bench| {
        bench.iter(|| black_box(a).union_is_full(black_box(&b)))
    });

    c.bench_function("halfspace_to_set", |bench| {
        bench.iter(|| low_weight_halfspace_to_sliceable_set(black_box(&[1, 1, -1, 1, 1]), 0, &edges))
    });

    c.bench_function("to_bytes", |bench| {
        bench.iter(|| SliceableSet::to_bytes(black_box(&a)))
    });
}

criterion_group!(benches, bitset_bench);
criterion_main!(benches);
