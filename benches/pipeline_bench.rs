use chart_tags::core::{extract_table, multi_series};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn csv_fixture(rows: usize, cols: usize) -> String {
    let mut lines = Vec::with_capacity(rows + 1);
    let header: Vec<String> = (0..cols).map(|c| format!("series{c}")).collect();
    lines.push(format!("t,{}", header.join(",")));
    for r in 0..rows {
        let cells: Vec<String> = (0..cols).map(|c| format!("{}", r * cols + c)).collect();
        lines.push(format!("{r},{}", cells.join(",")));
    }
    lines.join("\n")
}

fn bench_extract_table_5k(c: &mut Criterion) {
    let text = csv_fixture(5_000, 4);

    c.bench_function("extract_table_5k_rows", |b| {
        b.iter(|| {
            let table = extract_table(black_box(&text));
            black_box(table)
        })
    });
}

fn bench_multi_series_5k(c: &mut Criterion) {
    let table = extract_table(&csv_fixture(5_000, 4));

    c.bench_function("multi_series_5k_rows", |b| {
        b.iter(|| {
            let series = multi_series(black_box(&table));
            black_box(series)
        })
    });
}

criterion_group!(
    benches,
    bench_extract_table_5k,
    bench_multi_series_5k
);
criterion_main!(benches);
