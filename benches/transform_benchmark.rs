//! Benchmarks for the text transforms and history bookkeeping.
//!
//! Transforms run on every processing action, so they are measured across
//! input sizes; the history benchmark covers recording into a full session.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use transform_dashboard::history::SessionState;
use transform_dashboard::transform::TransformMode;

/// Generate prose-like input of roughly `size` bytes.
fn generate_text(size: usize) -> String {
    const WORDS: [&str; 8] = ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog."];
    let mut text = String::with_capacity(size + 8);
    let mut i = 0;
    while text.len() < size {
        text.push_str(WORDS[i % WORDS.len()]);
        text.push(' ');
        i += 1;
    }
    text
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    for size in [64usize, 1024, 16 * 1024] {
        let input = generate_text(size);
        group.throughput(Throughput::Bytes(input.len() as u64));

        for mode in TransformMode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &input, |b, input| {
                b.iter(|| mode.apply(black_box(input)))
            });
        }
    }

    group.finish();
}

fn bench_history_record(c: &mut Criterion) {
    c.bench_function("history_record_full_session", |b| {
        let mut session = SessionState::new();
        let input = generate_text(512);
        let output = TransformMode::Uppercase.apply(&input);
        b.iter(|| {
            session.record(
                TransformMode::Uppercase,
                black_box(&input),
                black_box(&output),
                Duration::from_millis(100),
            );
        })
    });
}

criterion_group!(benches, bench_transforms, bench_history_record);
criterion_main!(benches);
