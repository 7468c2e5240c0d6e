use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orrery::body::Body;
use orrery::orrery::Orrery;
use orrery::time::Instant;

/// A year of chained quarter searches.
fn bench_quarters(c: &mut Criterion) {
    let orrery = Orrery::new();
    let start = Instant::from_ut(8766.0).unwrap();

    c.bench_function("moon_quarter/one_year", |b| {
        b.iter(|| {
            let mut mq = orrery.search_moon_quarter(black_box(&start)).unwrap();
            for _ in 0..49 {
                mq = orrery.next_moon_quarter(&mq).unwrap();
            }
            black_box(mq)
        })
    });
}

fn bench_seasons(c: &mut Criterion) {
    let orrery = Orrery::new();

    c.bench_function("seasons/2024", |b| {
        b.iter(|| black_box(orrery.seasons(black_box(2024)).unwrap()))
    });
}

/// Next opposition of Mars after J2000.
fn bench_relative_longitude(c: &mut Criterion) {
    let orrery = Orrery::new();
    let start = Instant::from_ut(0.0).unwrap();

    c.bench_function("relative_longitude/mars_opposition", |b| {
        b.iter(|| {
            black_box(
                orrery
                    .search_relative_longitude(Body::Mars, 0.0, &start, 800.0)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_quarters, bench_seasons, bench_relative_longitude);
criterion_main!(benches);
