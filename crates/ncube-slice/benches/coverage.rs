use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ncube_core::{Cube, EdgeLexicon, SliceableSet};
use ncube_slice::{
    compute_low_weight_mss, compute_one_weight_mss, pairwise_unions_slice_cube,
    pairwise_unions_slice_cube_records,
};

fn coverage_bench(c: &mut Criterion) {
    let lexicon = EdgeLexicon::new(Cube::new(5).unwrap());
    let sets_1 = compute_one_weight_mss(&[0, 1, 2, 3], &lexicon);
    let sets_2 = compute_low_weight_mss(1, &lexicon);
    let bytes_1: Vec<u8> = sets_1.iter().flat_map(SliceableSet::to_bytes).collect();
    let bytes_2: Vec<u8> = sets_2.iter().flat_map(SliceableSet::to_bytes).collect();

    let mut group = c.benchmark_group("coverage");
    group.bench_function("words_5", |b| {
        b.iter(|| pairwise_unions_slice_cube(black_box(&sets_1), black_box(&sets_2)))
    });
    group.bench_function("bytes_5", |b| {
        b.iter(|| pairwise_unions_slice_cube_records(black_box(&bytes_1), black_box(&bytes_2), 80))
    });
    group.finish();
}

fn low_weight_bench(c: &mut Criterion) {
    let lexicon = EdgeLexicon::new(Cube::new(4).unwrap());
    c.bench_function("low_weight_mss_4", |b| b.iter(|| compute_low_weight_mss(2, &lexicon)));
}

criterion_group!(benches, coverage_bench, low_weight_bench);
criterion_main!(benches);
