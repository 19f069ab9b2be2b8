use criterion::{Criterion, criterion_group, criterion_main};
use rgb_color::RgbColor;
use std::hint::black_box;

fn roundtrip(s: &str) {
    let color = RgbColor::parse(s).unwrap();
    let _ = color.to_string();
}

fn bench(c: &mut Criterion) {
    c.bench_function("roundtrip uppercase", |b| {
        b.iter(|| roundtrip(black_box("ABCDEF")))
    });
    c.bench_function("roundtrip lowercase", |b| {
        b.iter(|| roundtrip(black_box("abcdef")))
    });
    c.bench_function("try_parse invalid", |b| {
        b.iter(|| RgbColor::try_parse(black_box("ABCGEF")))
    });
    c.bench_function("from_i64", |b| {
        b.iter(|| RgbColor::from_i64(black_box(100), black_box(150), black_box(200)))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
