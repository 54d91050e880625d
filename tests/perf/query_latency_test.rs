// Compiled into the lib test build via include!; paths are crate-relative.

use std::time::Instant;

use crate::index::SearchIndex;
use crate::model::{EntryKind, SearchEntry};
use crate::search::{search, ScoreWeights};

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn warm_query_p95_under_15ms() {
    let mut entries: Vec<SearchEntry> = (0..10_000)
        .map(|i| {
            SearchEntry::new(
                EntryKind::Page,
                &format!("Reference Page {i:05}"),
                &format!("Generated reference entry number {i}"),
                "Reference",
            )
            .with_url(&format!("reference-{i:05}.html"))
        })
        .collect();

    entries.push(
        SearchEntry::new(
            EntryKind::Application,
            "Google Chrome",
            "Fast and secure web browser",
            "Browser",
        )
        .with_keywords(&["browser", "web", "google", "internet"]),
    );

    let index = SearchIndex::build(entries);
    let weights = ScoreWeights::default();

    for _ in 0..30 {
        let _ = search(&index, "chrome browser", &weights, 8);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let _ = search(&index, "chrome browser", &weights, 8);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 15.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 15.0ms); batches={batch_p95:?}",
    );
}
