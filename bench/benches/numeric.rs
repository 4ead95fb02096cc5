use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strparse::{Convert, Culture, NumberStyles};

fn bench_integer(c: &mut Criterion) {
    c.bench_function("i32_ok", |b| {
        b.iter(|| black_box("-2147483648").convert().i32().parse_invariant().unwrap())
    });
    c.bench_function("i32_err", |b| {
        b.iter(|| black_box("2147483648").convert().i32().parse_invariant().unwrap_err())
    });
    c.bench_function("i32_nullable_err", |b| {
        b.iter(|| black_box("x").convert_nullable().i32().parse_invariant())
    });
    c.bench_function("u64_hex", |b| {
        b.iter(|| {
            black_box("ffffffffffffffff")
                .convert()
                .u64()
                .parse_invariant_style(NumberStyles::HEX_NUMBER)
                .unwrap()
        })
    });
}

fn bench_fractional(c: &mut Criterion) {
    let fr = Culture::get("fr-FR").unwrap();

    c.bench_function("f64_invariant", |b| {
        b.iter(|| black_box("1,234.5e-3").convert().f64().parse_invariant().unwrap())
    });
    c.bench_function("f64_culture", |b| {
        b.iter(|| black_box("1 234,5").convert().f64().parse_culture(fr).unwrap())
    });
    c.bench_function("decimal", |b| {
        b.iter(|| {
            black_box("79228162514264337593543950335")
                .convert()
                .decimal()
                .parse_invariant()
                .unwrap()
        })
    });
    c.bench_function("currency_rounded", |b| {
        b.iter(|| {
            black_box("-1 234,567 €")
                .convert()
                .currency()
                .rounded()
                .parse_culture(fr)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_integer, bench_fractional);
criterion_main!(benches);
