use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sodar_audit::processors::{CorpusAuditor, FileValidator};
use sodar_audit::readers::segment_lines;
use sodar_audit::utils::MainDataBuilder;
use std::path::PathBuf;

// A month of daily files, one every day from the first
fn create_test_corpus(days: u32) -> Vec<(PathBuf, Vec<String>)> {
    (1..=days)
        .map(|d| {
            let start = NaiveDate::from_ymd_opt(2013, 1, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let builder = MainDataBuilder::new(start);
            (builder.relative_path(), builder.build_lines())
        })
        .collect()
}

fn benchmark_segment_lines(c: &mut Criterion) {
    let (_, lines) = create_test_corpus(1).remove(0);

    c.bench_function("segment_lines", |b| {
        b.iter(|| segment_lines(black_box(&lines)))
    });
}

fn benchmark_file_validation(c: &mut Criterion) {
    let (path, lines) = create_test_corpus(1).remove(0);
    let validator = FileValidator::new();

    c.bench_function("file_validator_analyze", |b| {
        b.iter(|| validator.analyze(black_box(&path), black_box(&lines)))
    });
}

fn benchmark_corpus_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_audit");
    let auditor = CorpusAuditor::default();

    for days in [7, 31].iter() {
        let corpus = create_test_corpus(*days);
        group.bench_with_input(BenchmarkId::new("audit_sources", days), &corpus, |b, corpus| {
            b.iter(|| auditor.audit_sources(black_box(corpus.iter().cloned())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_segment_lines,
    benchmark_file_validation,
    benchmark_corpus_fold
);
criterion_main!(benches);
