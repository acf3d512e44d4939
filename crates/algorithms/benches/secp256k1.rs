//! Benchmarks for secp256k1 elliptic curve operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use k1crypt_algorithms::ec::secp256k1::{
    generate_secret, Context, FieldElement, Point, SECP256K1_FIELD_ELEMENT_SIZE,
};
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate a random field element for benchmarking
fn random_field_element() -> FieldElement {
    let mut bytes = [0u8; SECP256K1_FIELD_ELEMENT_SIZE];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(fe) = FieldElement::from_bytes(&bytes) {
            return fe;
        }
    }
}

fn bench_field_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_field");

    let a = random_field_element();
    let b = random_field_element();

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)));
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&b)));
    });

    group.bench_function("square", |bench| {
        bench.iter(|| black_box(&a).square());
    });

    group.bench_function("invert", |bench| {
        bench.iter(|| black_box(&a).invert());
    });

    group.bench_function("sqrt", |bench| {
        bench.iter(|| black_box(&a).sqrt());
    });

    group.finish();
}

fn bench_scalar_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_scalar");

    let a = generate_secret(&mut OsRng);
    let b = generate_secret(&mut OsRng);

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&b)));
    });

    group.bench_function("invert", |bench| {
        bench.iter(|| black_box(&a).invert());
    });

    group.finish();
}

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1_point");

    let ctx = Context::new(None);
    let k = generate_secret(&mut OsRng);
    let p = ctx.mul_generator(&generate_secret(&mut OsRng));
    let q = ctx.mul_generator(&generate_secret(&mut OsRng));

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(&p).add(black_box(&q)));
    });

    group.bench_function("double", |bench| {
        bench.iter(|| black_box(&p).double());
    });

    group.bench_function("mul_generator", |bench| {
        bench.iter(|| ctx.mul_generator(black_box(&k)));
    });

    group.bench_function("mul_variable_base", |bench| {
        bench.iter(|| black_box(&p).mul(black_box(&k)));
    });

    group.bench_function("decompress", |bench| {
        let encoded = p.serialize_compressed();
        bench.iter(|| Point::deserialize(black_box(&encoded)));
    });

    group.bench_function("context_create", |bench| {
        bench.iter(|| Context::new(Some(&[7u8; 32])));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_arithmetic,
    bench_scalar_arithmetic,
    bench_point_operations
);
criterion_main!(benches);
