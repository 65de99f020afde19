use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ncube_core::{low_weight_halfspace_to_sliceable_set, Complex, Cube, EdgeLexicon};
use ncube_sym::{unique_complex, unique_sliceable_set, EdgeAction, SymmetryGroup};

fn canonical_bench(c: &mut Criterion) {
    let cube = Cube::new(5).unwrap();
    let lexicon = EdgeLexicon::new(cube);
    let group = SymmetryGroup::new(cube);
    let action = EdgeAction::new(&group, &lexicon);
    let complex = Complex::from_vertices(cube, [0, 1, 2, 4, 8, 3, 5]);
    let set = low_weight_halfspace_to_sliceable_set(&[1, 1, -1, 1, 1], 0, &lexicon);

    let mut group_bench = c.benchmark_group("canonical");
    group_bench.sample_size(20);
    group_bench.bench_function("unique_complex_5", |b| {
        b.iter(|| unique_complex(black_box(&complex), &group))
    });
    group_bench.bench_function("unique_sliceable_set_5", |b| {
        b.iter(|| unique_sliceable_set(black_box(&set), &action))
    });
    group_bench.finish();
}

criterion_group!(benches, canonical_bench);
criterion_main!(benches);
