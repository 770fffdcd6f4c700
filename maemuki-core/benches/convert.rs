//! Conversion throughput benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use maemuki_core::ConversionEngine;

fn bench_convert(c: &mut Criterion) {
    let engine = ConversionEngine::new().unwrap();

    let short = "今日は疲れた";
    c.bench_function("convert_short", |b| {
        b.iter(|| engine.convert(black_box(short)))
    });

    let long = "今日は仕事で失敗した。問題が多くてもう無理だと思ったが、\
                難しい課題はスキルアップのチャンスでもある。"
        .repeat(64);
    c.bench_function("convert_long", |b| b.iter(|| engine.convert(black_box(&long))));

    let unmatched = "あいうえおかきくけこさしすせそ".repeat(64);
    c.bench_function("convert_unmatched", |b| {
        b.iter(|| engine.convert(black_box(&unmatched)))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
