//! Paginating large in-memory sources: default key order vs. a text field.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use pagekit::query::IntoMemoryQuery;
use pagekit::schema::{Record, TypeDescriptor};
use pagekit::{PageRequest, Paginator};

const N: u64 = 100_000;

#[derive(Clone)]
struct Event {
    id: u64,
    source: String,
    latency_ms: f64,
}

impl Record for Event {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder("Event")
            .key("id", |e: &Event| e.id)
            .field("source", |e: &Event| e.source.clone())
            .field("latency_ms", |e: &Event| e.latency_ms)
            .build()
    }
}

// Deterministic, unsorted fixture.
fn make_events(n: u64) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let id = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) % n;
            Event {
                id,
                source: format!("host-{:05}", id % 997),
                latency_ms: (id % 1000) as f64 / 7.0,
            }
        })
        .collect()
}

fn bench_paginate(c: &mut Criterion) {
    let events = make_events(N);
    let paginator = Paginator::default();

    c.bench_function("paginate/default_key", |b| {
        b.iter_batched(
            || events.clone(),
            |events| {
                let page = paginator
                    .paginate(events.into_query(), Some(&PageRequest::new(50, 30)))
                    .unwrap();
                black_box(page)
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("paginate/text_field_desc", |b| {
        let request = PageRequest::new(50, 30).sort_by_desc("source");
        b.iter_batched(
            || events.clone(),
            |events| black_box(paginator.paginate(events.into_query(), Some(&request)).unwrap()),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("paginate/unpaged", |b| {
        b.iter_batched(
            || events.clone(),
            |events| black_box(paginator.paginate(events.into_query(), None).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_paginate);
criterion_main!(benches);
