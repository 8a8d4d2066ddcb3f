use std::hint::black_box;

use cellar::{Cellar, FilterState, RangeFilter, WineRecord};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const GRAPES: [&str; 6] = [
    "Cabernet Sauvignon",
    "Pinot Noir",
    "Sauvignon Blanc",
    "Tempranillo",
    "Nebbiolo",
    "Riesling",
];
const COUNTRIES: [&str; 5] = ["France", "Italy", "Spain", "Chile", "Germany"];

/// Generate a synthetic catalog of `count` records
fn sample_catalog(count: usize) -> Vec<WineRecord> {
    (0..count)
        .map(|i| {
            WineRecord::new(format!("Domaine {} Cuvee {i}", GRAPES[i % GRAPES.len()]))
                .with_wine_type(if i % 4 == 0 { "White" } else { "Red" })
                .with_country(COUNTRIES[i % COUNTRIES.len()])
                .with_subregion(format!("Appellation {}", i % 40))
                .with_grape(GRAPES[(i * 7) % GRAPES.len()])
                .with_vintage(2000 + (i % 24) as i32)
                .with_price(8_000 + (i as u64 * 1_337) % 700_000)
                .with_aromas(["cherry", "oak"])
        })
        .collect()
}

/// Fuzzy search cost as the catalog grows
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scale");

    for size in [100usize, 1_000, 5_000] {
        let cellar = Cellar::new(sample_catalog(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("typo_query_{size}"), |b| {
            b.iter(|| cellar.search(black_box("pinot nior")).len())
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_scale");

    let mut state = FilterState::default();
    state.toggle_wine_type("Red");
    state.countries.insert("France".to_string());
    state.countries.insert("Chile".to_string());
    state.set_price_range(RangeFilter::new(20_000, 300_000));

    for size in [100usize, 1_000, 5_000] {
        let cellar = Cellar::new(sample_catalog(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("records_{size}"), |b| {
            b.iter(|| cellar.filter(black_box(&state)).len())
        });
        group.bench_function(format!("browse_{size}"), |b| {
            b.iter(|| cellar.browse(&state, black_box("cabernet")).len())
        });
    }

    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let cellar = Cellar::new(sample_catalog(5_000));
    c.bench_function("derive_options_5000", |b| b.iter(|| black_box(cellar.options())));
    c.bench_function("option_counts_5000", |b| {
        b.iter(|| black_box(cellar.option_counts()))
    });
}

criterion_group!(benches, bench_search, bench_filter, bench_options);
criterion_main!(benches);
