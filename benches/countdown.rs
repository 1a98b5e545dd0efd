// SPDX-License-Identifier: MPL-2.0
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use medconf::countdown::Remaining;
use std::hint::black_box;

fn countdown_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("countdown");

    let target = Utc.with_ymd_and_hms(2025, 9, 15, 9, 0, 0).unwrap();
    let now = target - Duration::days(33) - Duration::seconds(1234);

    group.bench_function("between", |b| {
        b.iter(|| black_box(Remaining::between(black_box(target), black_box(now))));
    });

    group.bench_function("between_expired", |b| {
        let late = target + Duration::seconds(1);
        b.iter(|| black_box(Remaining::between(black_box(target), black_box(late))));
    });

    group.finish();
}

criterion_group!(benches, countdown_benchmark);
criterion_main!(benches);
