use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use meshbake::math::{Vec2, Vec3};
use meshbake::mesh::generators::generate_plane;
use meshbake::{MeshBuilder, Vertex};

fn accumulate_grid(segments: u32) -> MeshBuilder {
    let mut builder = MeshBuilder::new();
    let corner = |i: u32, j: u32| {
        let fx = i as f32 / segments as f32;
        let fy = j as f32 / segments as f32;
        Vertex::new(Vec3::new(fx, fy, 0.0), Vec2::new(fx, 1.0 - fy))
    };
    for j in 0..segments {
        for i in 0..segments {
            builder.add_quad(
                corner(i, j),
                corner(i + 1, j),
                corner(i, j + 1),
                corner(i + 1, j + 1),
            );
        }
    }
    builder
}

// ---------------------------------------------------------------------------
// Accumulation (dedup-heavy)
// ---------------------------------------------------------------------------

fn bench_accumulate_small(c: &mut Criterion) {
    c.bench_function("accumulate_grid_8x8", |b| {
        b.iter(|| accumulate_grid(black_box(8)));
    });
}

fn bench_accumulate_large(c: &mut Criterion) {
    c.bench_function("accumulate_grid_64x64", |b| {
        b.iter(|| accumulate_grid(black_box(64)));
    });
}

// ---------------------------------------------------------------------------
// Baking
// ---------------------------------------------------------------------------

fn bench_bake(c: &mut Criterion) {
    let builder = accumulate_grid(64);
    c.bench_function("bake_grid_64x64", |b| {
        b.iter_batched(
            || builder.clone(),
            |builder| builder.bake(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_generate_plane(c: &mut Criterion) {
    c.bench_function("generate_plane_32x32", |b| {
        b.iter(|| generate_plane(black_box(1.0), black_box(1.0), black_box(32), black_box(32)));
    });
}

criterion_group!(
    benches,
    bench_accumulate_small,
    bench_accumulate_large,
    bench_bake,
    bench_generate_plane,
);
criterion_main!(benches);
