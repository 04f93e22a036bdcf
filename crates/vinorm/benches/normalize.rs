use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vinorm::Normalizer;
use vinorm_core::TextNormalizer;

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    c.bench_function("normalize_plain", |b| {
        b.iter(|| {
            normalizer
                .normalize(black_box("xin chào các bạn đến với chương trình hôm nay"))
                .unwrap()
        })
    });

    c.bench_function("normalize_numeric_heavy", |b| {
        b.iter(|| {
            normalizer
                .normalize(black_box(
                    "Hôm nay 25/12/2023 lúc 14:30, giá 1.500.000 đồng tăng 3-5%, gọi 0912345678",
                ))
                .unwrap()
        })
    });

    c.bench_function("transliterate_foreign", |b| {
        b.iter(|| {
            normalizer
                .normalize(black_box("dùng database và internet với smartphone"))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
