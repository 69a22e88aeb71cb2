use corn_eda::profile::{check_target_missingness, column_profiles, date_span};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;

fn master_frame(days: usize) -> DataFrame {
    let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

    let dates: Vec<String> = (0..days)
        .map(|i| (start + chrono::Duration::days(i as i64)).to_string())
        .collect();
    // Every seventh close is missing, the tail is left to forecast
    let closes: Vec<Option<f64>> = (0..days)
        .map(|i| {
            if i % 7 == 0 || i + 30 >= days {
                None
            } else {
                Some(400.0 + (i % 50) as f64)
            }
        })
        .collect();
    let temps: Vec<f64> = (0..days).map(|i| 10.0 + (i % 30) as f64 * 0.5).collect();

    df!(
        "date" => dates,
        "futures_close_ZC_1" => closes,
        "temperature_avg" => temps,
    )
    .unwrap()
}

fn benchmark_target_missingness(c: &mut Criterion) {
    let df = master_frame(9_000);

    c.bench_function("target_missingness", |b| {
        b.iter(|| black_box(check_target_missingness(&df, "futures_close_ZC_1")));
    });
}

fn benchmark_column_profiles(c: &mut Criterion) {
    let df = master_frame(9_000);

    c.bench_function("column_profiles", |b| {
        b.iter(|| black_box(column_profiles(&df)));
    });
}

fn benchmark_date_span(c: &mut Criterion) {
    let df = master_frame(9_000);

    c.bench_function("date_span", |b| {
        b.iter(|| black_box(date_span(&df, "date")));
    });
}

criterion_group!(
    benches,
    benchmark_target_missingness,
    benchmark_column_profiles,
    benchmark_date_span
);
criterion_main!(benches);
