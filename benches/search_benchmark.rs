//! Benchmarks for the search and ranking engine.

use criterion::{criterion_group, criterion_main, Criterion};
use glycan_tools::config::SearchConfig;
use glycan_tools::model::GlycanCatalog;
use glycan_tools::search::{partial_ratio, SearchEngine};
use std::hint::black_box;

/// Build a synthetic catalog of `n` single-chain glycans of varying length.
fn synthetic_catalog(n: usize) -> GlycanCatalog {
    let mut entries = Vec::with_capacity(n);
    for i in 0..n {
        let residues = 1 + i % 8;
        let descriptors: String = (0..residues)
            .map(|r| format!("[a{}122h-1x_1-5]", r % 4))
            .collect();
        let sequence: Vec<String> = (1..=residues).map(|r| r.to_string()).collect();
        let linkages: Vec<String> = (0..residues.saturating_sub(1))
            .map(|l| format!("{}4-{}1", (b'a' + l as u8) as char, (b'b' + l as u8) as char))
            .collect();
        let wurcs = format!(
            "WURCS=2.0/{residues},{residues},{}/{descriptors}/{}/{}",
            linkages.len(),
            sequence.join("-"),
            linkages.join("_")
        );
        entries.push(format!(
            r#""GS{i:05}": {{"archetype": {{"ID": "GS{i:05}", "glytoucan": "G{i:05}AA", "iupac": "Man(a1-3)Man", "wurcs": "{wurcs}", "mass": {}}}}}"#,
            180.0 + i as f64
        ));
    }
    let json = format!("{{{}}}", entries.join(","));
    GlycanCatalog::from_json_str(&json).expect("synthetic catalog parses")
}

fn benchmark_structural_search(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let engine = SearchEngine::new(&catalog, SearchConfig::default());
    let query = "WURCS=2.0/4,4,3/[a0122h-1x_1-5][a1122h-1x_1-5][a2122h-1x_1-5][a3122h-1x_1-5]/1-2-3-4/a4-b1_b4-c1_c4-d1";

    c.bench_function("structural_search_200", |b| {
        b.iter(|| {
            let hits = engine.structural(black_box(query)).expect("query parses");
            black_box(hits);
        })
    });
}

fn benchmark_text_search(c: &mut Criterion) {
    let catalog = synthetic_catalog(200);
    let engine = SearchEngine::new(&catalog, SearchConfig::default());

    c.bench_function("text_search_200", |b| {
        b.iter(|| {
            let hits = engine.text(black_box("mannose G00042AA"));
            black_box(hits);
        })
    });
}

fn benchmark_partial_ratio(c: &mut Criterion) {
    let a = "a2122h-1b_1-5_2*NCC/3=O a1122h-1a_1-5 a1122h-1b_1-5";
    let b_str = "a2122h-1x_1-5_2*NCC/3=O a1122h-1a_1-5 a2112h-1b_1-5 a1122h-1b_1-5";

    c.bench_function("partial_ratio", |bench| {
        bench.iter(|| {
            black_box(partial_ratio(black_box(a), black_box(b_str)));
        })
    });
}

criterion_group!(
    benches,
    benchmark_structural_search,
    benchmark_text_search,
    benchmark_partial_ratio
);
criterion_main!(benches);
