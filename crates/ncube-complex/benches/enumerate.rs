use criterion::{criterion_group, criterion_main, Criterion};
use ncube_complex::{compute_cut_complexes, LinearSeparability};
use ncube_core::Cube;
use ncube_sym::SymmetryGroup;

fn enumerate_bench(c: &mut Criterion) {
    let group = SymmetryGroup::new(Cube::new(4).unwrap());
    let mut bench_group = c.benchmark_group("enumerate");
    bench_group.sample_size(10);
    bench_group.bench_function("cut_complexes_4", |b| {
        b.iter(|| compute_cut_complexes(&group, &LinearSeparability))
    });
    bench_group.finish();
}

criterion_group!(benches, enumerate_bench);
criterion_main!(benches);
