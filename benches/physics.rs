//! Benchmarks for drapery cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drapery::{ClothConfig, ClothMesh, Vec3};

fn bench_cloth_construction(c: &mut Criterion) {
    c.bench_function("cloth_16x16_construction", |b| {
        b.iter(|| {
            let config = ClothConfig::<f32>::new(16)
                .with_gravity(Vec3::new(0.0, 0.0, -9.8));
            ClothMesh::new(&config).unwrap()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_16x16_60_steps", |b| {
        b.iter(|| {
            let config = ClothConfig::<f32>::new(16)
                .with_gravity(Vec3::new(0.0, 0.0, -9.8));
            let mut cloth = ClothMesh::new(&config).unwrap();
            for _ in 0..60 {
                cloth.advance(0.001).unwrap();
            }
            cloth.positions().to_vec()
        });
    });
}

fn bench_large_cloth_step(c: &mut Criterion) {
    c.bench_function("cloth_64x64_single_step", |b| {
        let config = ClothConfig::<f32>::new(64)
            .with_gravity(Vec3::new(0.0, 0.0, -9.8));
        let mut cloth = ClothMesh::new(&config).unwrap();
        b.iter(|| {
            cloth.advance(0.001).unwrap();
            cloth.point(cloth.center_index())
        });
    });
}

criterion_group!(
    benches,
    bench_cloth_construction,
    bench_cloth_simulation,
    bench_large_cloth_step
);
criterion_main!(benches);
