use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trend_chi2::data::ContingencyTable;
use trend_chi2::expected::expected_frequencies;
use trend_chi2::trend::chisquare_trend_contingency;

pub fn trend_benchmarks(c: &mut Criterion) {
    let k = 64;
    let first: Vec<f64> = (0..k).map(|i| 200.0 - i as f64).collect();
    let second: Vec<f64> = (0..k).map(|i| 100.0 + i as f64).collect();
    let observed = ContingencyTable::from_rows(&[first, second]).unwrap();
    let tendencies: Vec<f64> = (0..k).map(|i| i as f64).collect();

    c.bench_function("expected_frequencies", |b| {
        b.iter(|| expected_frequencies(black_box(&observed)))
    });

    c.bench_function("chisquare_trend_contingency", |b| {
        b.iter(|| chisquare_trend_contingency(black_box(&observed), black_box(&tendencies), None))
    });
}

criterion_group!(benches, trend_benchmarks);
criterion_main!(benches);
