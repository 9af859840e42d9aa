//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growth_core::traits::{BarIndicator, Indicator};
use growth_core::types::Bar;
use growth_indicators::{simd, Aroon, Ema, Rsi, Sma, StochRsi, WilliamsR};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn generate_test_bars(size: usize) -> Vec<Bar> {
    generate_test_data(size)
        .into_iter()
        .enumerate()
        .map(|(i, open)| {
            let close = open * (1.0 + (i as f64 * 0.9).sin() / 100.0);
            Bar::new(i as i64, open, open.max(close) + 0.5, open.min(close) - 0.5, close, 1000.0)
        })
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("standard", size), &data, |b, data| {
            let sma = Sma::new(14);
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("standard", size), &data, |b, data| {
            let ema = Ema::new(24);
            b.iter(|| ema.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let bars = generate_test_bars(*size);

        group.bench_with_input(BenchmarkId::new("rsi", size), &bars, |b, bars| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.calculate_bars(black_box(bars)))
        });

        group.bench_with_input(BenchmarkId::new("stoch_rsi", size), &bars, |b, bars| {
            let rsi = Rsi::new(14).calculate_bars(bars);
            let stoch = StochRsi::new(14);
            b.iter(|| stoch.calculate_column(black_box(&rsi)))
        });
    }

    group.finish();
}

fn benchmark_gain_loss_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("GainLossSplit");

    for size in [1000, 10000, 100000].iter() {
        let changes: Vec<f64> = generate_test_data(*size).iter().map(|v| v - 100.0).collect();

        group.bench_with_input(BenchmarkId::new("simd", size), &changes, |b, changes| {
            b.iter(|| simd::split_gains_losses(black_box(changes)))
        });
    }

    group.finish();
}

fn benchmark_oscillators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Oscillators");

    for size in [1000, 10000, 100000].iter() {
        let bars = generate_test_bars(*size);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        group.bench_with_input(BenchmarkId::new("aroon", size), &closes, |b, closes| {
            let aroon = Aroon::new(25);
            b.iter(|| aroon.calculate(black_box(closes)))
        });

        group.bench_with_input(BenchmarkId::new("williams_r", size), &bars, |b, bars| {
            let williams = WilliamsR::new(14);
            b.iter(|| williams.calculate_bars(black_box(bars)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sma,
    benchmark_ema,
    benchmark_rsi,
    benchmark_gain_loss_split,
    benchmark_oscillators
);
criterion_main!(benches);
