use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_vector::{FloatVectorExt, closest, farthest, nearest};
use nalgebra::{Vector3, vector};

fn candidate_grid() -> Vec<Vector3<f32>> {
    let mut candidates = Vec::with_capacity(32 * 32 * 32);
    for i in 0..32 {
        for j in 0..32 {
            for k in 0..32 {
                candidates.push(vector![i as f32, j as f32, k as f32] * 0.37);
            }
        }
    }
    candidates
}

pub fn bench_closest(c: &mut Criterion) {
    let candidates = candidate_grid();
    let target = vector![5.1, 7.3, 2.2];
    c.bench_function("closest", |b| {
        b.iter(|| closest(black_box(&target), candidates.iter().copied()))
    });
}

pub fn bench_farthest(c: &mut Criterion) {
    let candidates = candidate_grid();
    let target = vector![5.1, 7.3, 2.2];
    c.bench_function("farthest", |b| {
        b.iter(|| farthest(black_box(&target), candidates.iter().copied()))
    });
}

pub fn bench_nearest(c: &mut Criterion) {
    let candidates = candidate_grid();
    let target = vector![5.1, 7.3, 2.2];
    c.bench_function("nearest", |b| {
        b.iter(|| nearest(black_box(&target), candidates.iter().copied()))
    });
}

pub fn bench_snap_to_grid(c: &mut Criterion) {
    let candidates = candidate_grid();
    c.bench_function("snap_to_grid", |b| {
        b.iter(|| {
            candidates
                .iter()
                .map(|candidate| candidate.round_to_multiple(black_box(0.5)))
                .fold(Vector3::zeros(), |sum, snapped| sum + snapped)
        })
    });
}

criterion_group!(
    benches,
    bench_closest,
    bench_farthest,
    bench_nearest,
    bench_snap_to_grid
);
criterion_main!(benches);
