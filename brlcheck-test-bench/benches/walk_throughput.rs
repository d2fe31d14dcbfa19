use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use brlcheck_core::check_str;
use brlcheck_test_bench::{generate_document, write_str_from_event, LetterTranslator};

fn bench_events(c: &mut Criterion) {
    let doc = generate_document(500);
    let mut buff = String::with_capacity(doc.len() * 4);
    let mut group = c.benchmark_group("brlcheck-events");
    group.throughput(Throughput::Bytes(doc.len() as u64));
    group.bench_function("events_500", |b| {
        b.iter(|| {
            buff.clear();
            write_str_from_event(&mut buff, black_box(&doc));
            assert!(!buff.is_empty());
        });
    });
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("brlcheck-walk");
    for count in [10, 500] {
        let doc = generate_document(count);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_function(format!("check_{count}"), |b| {
            b.iter(|| {
                let mut translator = LetterTranslator::new();
                let report = check_str(black_box(&doc), &mut translator);
                assert!(matches!(report, Ok(report) if report.is_success()));
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50).warm_up_time(Duration::from_millis(100));
    targets = bench_events, bench_check
}
criterion_main!(benches);
