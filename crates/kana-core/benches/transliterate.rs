use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::table::KanaTable;
use kana_core::transliterate_with;

const SAMPLES: &[(&str, &str)] = &[
    ("hiragana", "きょうはいいてんきですね"),
    ("katakana", "コンピューターのキーボード"),
    ("mixed", "私は東京タワーにいきました。ちょっとまって!"),
];

fn bench_transliterate(c: &mut Criterion) {
    let table = KanaTable::global();
    let mut group = c.benchmark_group("transliterate");
    for (name, text) in SAMPLES {
        let input = text.repeat(64);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| transliterate_with(table, input))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
