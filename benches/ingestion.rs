use criterion::{black_box, criterion_group, criterion_main, Criterion};

use multimodes::ingestion::delimited::read_delimited_from_str;
use multimodes::ingestion::{load_light_curve, LoadOptions};

fn headered_csv(rows: usize) -> String {
    let mut out = String::from("time,flux\n");
    for i in 0..rows {
        // Unsorted times so the pipeline's sort does real work.
        let t = ((i * 7919) % rows) as f64 / 100.0;
        out.push_str(&format!("{t},{}\n", 1000.0 + (i % 50) as f64));
    }
    out
}

fn bench_delimited(c: &mut Criterion) {
    let input = headered_csv(10_000);

    c.bench_function("read_delimited_from_str 10k rows", |b| {
        b.iter(|| read_delimited_from_str(black_box(&input), "time", "flux").unwrap())
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.csv");
    std::fs::write(&path, &input).unwrap();
    let options = LoadOptions::default();

    c.bench_function("load_light_curve 10k rows", |b| {
        b.iter(|| load_light_curve(black_box(&path), &options).unwrap())
    });
}

criterion_group!(benches, bench_delimited);
criterion_main!(benches);
