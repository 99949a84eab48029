use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, Utc};
use storehub_inventory::{Hub, Item};

fn populated_hub(size: usize) -> Hub {
    let now = Utc::now();
    let mut hub = Hub::with_date(now);
    for i in 0..size {
        let item = Item::new(format!("item-{i}"), "bench item", now + Duration::hours(i as i64 % 96 - 48))
            .with_tags(["bench", if i % 2 == 0 { "even" } else { "odd" }])
            .with_cost((i % 1000) as f64)
            .expect("bench costs are non-negative");
        hub.add_item(item);
    }
    hub
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("hub_queries");

    for size in [100usize, 1_000, 10_000] {
        let hub = populated_hub(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("find_by_tags", size), &hub, |b, hub| {
            b.iter(|| black_box(hub.find_by_tags(&["bench", "even"])))
        });

        group.bench_with_input(BenchmarkId::new("find_most_valuable", size), &hub, |b, hub| {
            b.iter(|| black_box(hub.find_most_valuable(10)))
        });

        group.bench_with_input(BenchmarkId::new("find_before_or_on", size), &hub, |b, hub| {
            b.iter(|| black_box(hub.find_before_or_on(hub.date())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
