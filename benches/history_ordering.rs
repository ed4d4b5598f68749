use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use slack_dump::history::order_history;
use slack_dump::models::Message;

/// Messages as pagination returns them: newest page first, each page newest first
fn generate_fetched_history(num_messages: usize) -> Vec<Message> {
    (0..num_messages)
        .rev()
        .map(|i| Message::new(format!("{}.{:06}", 1_600_000_000 + (i as i64) * 37, i % 1_000_000)))
        .collect()
}

fn bench_order_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_history");

    for size in [1_000, 10_000, 100_000].iter() {
        let history = generate_fetched_history(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || history.clone(),
                |messages| order_history(black_box(messages)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_order_history);
criterion_main!(benches);
