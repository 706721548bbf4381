use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scoop_math::{DMatrix4, FMatrix4, FVector3, FVector4, Matrix, Vector};

fn bench_vector(c: &mut Criterion) {
    let a: FVector3 = Vector::new([1.0, 2.0, 3.0]);
    let b: FVector3 = Vector::new([-4.0, 0.5, 2.5]);

    c.bench_function("vector dot", |bench| {
        bench.iter(|| black_box(&a).dot(black_box(&b)))
    });

    c.bench_function("vector cross", |bench| {
        bench.iter(|| black_box(&a).cross(black_box(&b)))
    });

    c.bench_function("vector normalize", |bench| {
        bench.iter(|| black_box(&a).normalize())
    });
}

fn bench_matrix(c: &mut Criterion) {
    let t = FMatrix4::translation(&Vector::new([1.0, 2.0, 3.0]));
    let s = FMatrix4::scaling(&Vector::new([2.0, 2.0, 2.0]));
    let p: FVector4 = Vector::new([1.0, 1.0, 1.0, 1.0]);

    c.bench_function("mat4 mul mat4", |bench| {
        bench.iter(|| black_box(t) * black_box(s))
    });

    c.bench_function("mat4 mul vec4", |bench| {
        bench.iter(|| black_box(t) * black_box(p))
    });

    c.bench_function("mat4 transpose", |bench| {
        bench.iter(|| black_box(&t).transpose())
    });

    let m = DMatrix4::from_diagonal(3.0);
    c.bench_function("mat4 mul in place", |bench| {
        bench.iter(|| {
            let mut acc = black_box(m);
            acc.mul_in_place(black_box(&m));
            acc
        })
    });

    let a = Matrix::<f64, 8, 16>::from_diagonal(1.5);
    let b = Matrix::<f64, 16, 8>::from_diagonal(0.5);
    c.bench_function("mat8x16 mul mat16x8", |bench| {
        bench.iter(|| black_box(&a).mul_mat(black_box(&b)))
    });
}

criterion_group!(benches, bench_vector, bench_matrix);
criterion_main!(benches);
