use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yomi_core::{canonical_key, compare, sort_key, DictionaryOrder};

static PAIRS: &[(&str, &str, &str)] = &[
    ("primary", "きょう", "きのう"),
    ("script_tie", "めんどうくさい", "メンドウクサイ"),
    ("halfwidth", "ｶﾞｰﾃﾞﾝﾊﾟｰﾃｨｰ", "ガーデンパーティー"),
];

fn word_list() -> Vec<String> {
    let stems = [
        "あろえ", "アロエ", "でーたー", "データ", "ぼんど", "ホント", "ｱがパヺヿ", "あゞ",
        "ラジヱーター", "きゃく", "きやく", "がんばります", "ｶﾞｯｺｳ", "すいか", "スイカ",
    ];
    let suffixes = ["", "か", "ー", "ゝ", "っと", "ﾊﾟ"];
    stems
        .iter()
        .flat_map(|s| suffixes.iter().map(move |x| format!("{s}{x}")))
        .collect()
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("collate/compare");
    for &(label, a, b) in PAIRS {
        group.bench_with_input(BenchmarkId::new(label, a.len()), &(a, b), |bench, &(a, b)| {
            bench.iter(|| compare(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let words = word_list();
    let order = DictionaryOrder::new();
    let mut group = c.benchmark_group("collate/sort");
    group.bench_function("comparator", |b| {
        b.iter(|| {
            let mut list = words.clone();
            order.sort(&mut list);
            list
        });
    });
    group.bench_function("cached_key", |b| {
        b.iter(|| {
            let mut list = words.clone();
            list.sort_by_cached_key(|w| sort_key(w));
            list
        });
    });
    group.bench_function("canonical_key", |b| {
        b.iter(|| words.iter().map(|w| canonical_key(w)).count());
    });
    group.finish();
}

criterion_group!(benches, bench_compare, bench_sort);
criterion_main!(benches);
