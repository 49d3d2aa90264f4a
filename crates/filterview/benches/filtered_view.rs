//! Benchmark – `filterview` views over a large buffer
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use filterview::{FilteredStringView, Predicate, compose, split, substr};

/// Deterministic text of exactly `len` bytes: words separated by single
/// spaces, with a comma after every fourth word.
fn make_text(len: usize) -> String {
    const WORDS: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut s = String::with_capacity(len + 16);
    let mut i = 0;
    while s.len() < len {
        s.push_str(WORDS[i % WORDS.len()]);
        s.push(if i % 4 == 3 { ',' } else { ' ' });
        i += 1;
    }
    s.truncate(len);
    s
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_view");

    for &len in &[1_024usize, 64 * 1_024, 1_024 * 1_024] {
        let text = make_text(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("iterate", len), &text, |b, text| {
            let view = FilteredStringView::with_predicate(text, |c| c != b' ');
            b.iter(|| black_box(&view).iter().map(u64::from).sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("compose_3", len), &text, |b, text| {
            let view = FilteredStringView::new(text);
            let composed = compose(
                &view,
                [
                    Predicate::new(|c| c != b' '),
                    Predicate::new(|c| c != b','),
                    Predicate::new(|c| c != b'a'),
                ],
            );
            b.iter(|| black_box(&composed).size());
        });

        group.bench_with_input(BenchmarkId::new("substr_middle", len), &text, |b, text| {
            let view = FilteredStringView::with_predicate(text, |c| c != b' ');
            let half = isize::try_from(len / 2).unwrap();
            b.iter(|| substr(black_box(&view), half / 2, half).raw_len());
        });

        group.bench_with_input(BenchmarkId::new("split_comma", len), &text, |b, text| {
            let view = FilteredStringView::with_predicate(text, |c| c != b' ');
            let delimiter = FilteredStringView::new(",");
            b.iter(|| split(black_box(&view), &delimiter).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
