use criterion::{black_box, criterion_group, criterion_main, Criterion};

use latlng2minecraft::batch::{convert_rows, convert_rows_sequential, Direction};
use latlng2minecraft::proj::{LocalGrid, Projection};
use latlng2minecraft::{GeoPoint, PlanarPoint, ReferencePair};

const BASE: GeoPoint = GeoPoint::new(36.138755, 139.388908);

fn make_geo_points(n: usize) -> Vec<GeoPoint> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            GeoPoint::new(36.0 + t * 0.3, 139.2 + t * 0.4)
        })
        .collect()
}

fn make_cells(n: usize) -> Vec<(String, String)> {
    make_geo_points(n)
        .into_iter()
        .map(|p| (p.latitude.to_string(), p.longitude.to_string()))
        .collect()
}

fn bench_projection_throughput(c: &mut Criterion) {
    let grid = LocalGrid::wgs84(BASE);
    let targets = make_geo_points(1_000_000);

    c.bench_function("forward_1M_points", |b| {
        b.iter(|| black_box(grid.forward_batch(&targets)));
    });

    let offsets: Vec<PlanarPoint> = grid.forward_batch(&targets);
    c.bench_function("inverse_1M_points", |b| {
        b.iter(|| black_box(grid.inverse_batch(&offsets)));
    });
}

fn bench_rows_sequential_vs_parallel(c: &mut Criterion) {
    let reference = ReferencePair::default();
    let cells = make_cells(100_000);

    c.bench_function("rows_100k_sequential", |b| {
        b.iter(|| {
            black_box(convert_rows_sequential(
                Direction::LatLngToPlanar,
                &reference,
                &cells,
            ))
        });
    });

    c.bench_function("rows_100k_parallel", |b| {
        b.iter(|| black_box(convert_rows(Direction::LatLngToPlanar, &reference, &cells)));
    });
}

fn bench_rows_thread_scaling(c: &mut Criterion) {
    let reference = ReferencePair::default();
    let cells = make_cells(100_000);

    for &threads in &[1, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();

        c.bench_function(&format!("rows_threads_{threads}_100k"), |b| {
            b.iter(|| {
                black_box(
                    pool.install(|| convert_rows(Direction::LatLngToPlanar, &reference, &cells)),
                )
            });
        });
    }
}

criterion_group!(
    benches,
    bench_projection_throughput,
    bench_rows_sequential_vs_parallel,
    bench_rows_thread_scaling
);
criterion_main!(benches);
