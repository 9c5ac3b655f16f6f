//! Benchmarks for GLB conversion.
//!
//! Run with: cargo bench -p glb-export
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p glb-export -- --save-baseline main
//! 2. After changes: cargo bench -p glb-export -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glb_export::convert;
use scene_types::{MeshRecord, Point3};

/// Build a quad grid mesh with `n` x `n` cells.
///
/// Quads exercise the fan path; the shared-vertex layout matches how
/// interchange formats author height fields and panels.
fn quad_grid(n: u32) -> MeshRecord {
    let side = n + 1;
    let mut points = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            #[allow(clippy::cast_precision_loss)]
            // Grid coordinates are small, exactly representable
            points.push(Point3::new(x as f32, y as f32, 0.0));
        }
    }

    let mut counts = Vec::with_capacity((n * n) as usize);
    let mut indices = Vec::with_capacity((n * n * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            let base = y * side + x;
            counts.push(4);
            indices.extend_from_slice(&[base, base + 1, base + side + 1, base + side]);
        }
    }

    MeshRecord {
        name: format!("grid_{n}x{n}"),
        points,
        face_vertex_counts: counts,
        face_vertex_indices: indices,
        normals: None,
    }
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for n in [8, 32, 128] {
        let record = quad_grid(n);
        let faces = record.face_count() as u64;
        group.throughput(Throughput::Elements(faces));
        group.bench_function(format!("quad_grid_{n}x{n}"), |b| {
            b.iter(|| convert(black_box(std::slice::from_ref(&record))));
        });
    }

    group.finish();
}

fn bench_convert_many_meshes(c: &mut Criterion) {
    let records: Vec<MeshRecord> = (0..64).map(|_| quad_grid(8)).collect();

    let mut group = c.benchmark_group("convert_many");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("64_meshes", |b| {
        b.iter(|| convert(black_box(&records)));
    });
    group.finish();
}

criterion_group!(benches, bench_convert, bench_convert_many_meshes);
criterion_main!(benches);
