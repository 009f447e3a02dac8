use criterion::{criterion_group, criterion_main, Criterion};
use geodini_core::{merge, RankingHint, SearchResult};
use std::hint::black_box;

fn results(n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| SearchResult {
            id: format!("place-{i}"),
            name: format!("Place {i}"),
            subtype: "locality".to_string(),
            country: "DE".to_string(),
            hierarchy: vec!["Germany".to_string(), "Bavaria".to_string()],
            geometry: None,
            source_type: None,
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let small = results(20);
    let large = results(2_000);
    let hint = RankingHint {
        most_probable_id: Some("place-17".to_string()),
        next_probable_ids: vec!["place-3".into(), "place-11".into(), "place-19".into()],
    };

    c.bench_function("merge 20 no hint", |b| {
        b.iter(|| merge(black_box(&small), None))
    });
    c.bench_function("merge 20 ranked", |b| {
        b.iter(|| merge(black_box(&small), Some(black_box(&hint))))
    });
    c.bench_function("merge 2000 ranked", |b| {
        b.iter(|| merge(black_box(&large), Some(black_box(&hint))))
    });
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
