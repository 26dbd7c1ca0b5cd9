use criterion::{criterion_group, criterion_main, Criterion};
use huechord::{discover, Color, TemplateSet};

/// A nine-color gradient ramp from apricot to deep violet.
const RAMP: [[u8; 3]; 9] = [
    [0xff, 0xb9, 0x7a],
    [0xff, 0x95, 0x7c],
    [0xff, 0x72, 0x7f],
    [0xff, 0x50, 0x83],
    [0xf0, 0x2f, 0x87],
    [0xc7, 0x00, 0x84],
    [0x9a, 0x00, 0x7f],
    [0x6a, 0x00, 0x76],
    [0x33, 0x00, 0x6b],
];

pub fn run_benchmarks(c: &mut Criterion) {
    let pool: Vec<Color> = RAMP
        .iter()
        .map(|&[r, g, b]| Color::from_24bit(r, g, b))
        .collect();

    let mut group = c.benchmark_group("palette");

    group.bench_function("templates", |b| b.iter(|| TemplateSet::new(&pool[0])));

    group.bench_function("discover", |b| b.iter(|| discover(&pool)));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
