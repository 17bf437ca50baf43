use aqi_explorer::analyzers::AqiAnalyzer;
use aqi_explorer::models::{Dataset, Reading, CATEGORY_AQI};
use aqi_explorer::processors::{filter, top_n};
use aqi_explorer::readers::DatasetReader;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Synthetic readings cycling through cities and categories
fn create_test_dataset(rows: usize) -> Dataset {
    let readings = (0..rows)
        .map(|i| {
            let (label, _) = CATEGORY_AQI[i % CATEGORY_AQI.len()];
            Reading::from_category(Some(format!("City {}", i % 50)), label)
                .expect("label comes from the category table")
        })
        .collect();

    Dataset::new(vec!["City".to_string(), "PM2.5 AQI Category".to_string()], readings)
}

fn create_test_csv(rows: usize) -> String {
    let mut csv = String::from("Country,City,AQI Value,PM2.5 AQI Category,lat,lng\n");
    for i in 0..rows {
        let (label, _) = CATEGORY_AQI[i % CATEGORY_AQI.len()];
        csv.push_str(&format!(
            "Country {},City {},{},{},{:.4},{:.4}\n",
            i % 20,
            i % 50,
            i % 400,
            label,
            (i % 180) as f64 - 90.0,
            (i % 360) as f64 - 180.0
        ));
    }
    csv
}

fn benchmark_loader(c: &mut Criterion) {
    let csv = create_test_csv(10_000);

    c.bench_function("load_10k_rows", |b| {
        b.iter(|| {
            let (dataset, _) = DatasetReader::new()
                .load_from_reader(black_box(csv.as_bytes()))
                .expect("valid csv");
            black_box(dataset.len())
        })
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for rows in [1_000, 10_000, 100_000] {
        let dataset = create_test_dataset(rows);
        let analyzer = AqiAnalyzer::new();

        group.bench_with_input(BenchmarkId::new("filter_city", rows), &dataset, |b, ds| {
            b.iter(|| black_box(filter(&ds.view(), Some("City 7"), 50.0).len()))
        });

        group.bench_with_input(BenchmarkId::new("top_10", rows), &dataset, |b, ds| {
            b.iter(|| black_box(top_n(&ds.view(), 10).len()))
        });

        group.bench_with_input(BenchmarkId::new("group_mean", rows), &dataset, |b, ds| {
            b.iter(|| black_box(analyzer.group_mean_by_city(&ds.view()).len()))
        });

        group.bench_with_input(BenchmarkId::new("distinct_cities", rows), &dataset, |b, ds| {
            b.iter(|| black_box(ds.distinct_cities().len()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_loader, benchmark_queries);
criterion_main!(benches);
