use jc1::cipher::{Jc1, KeyStream, UberJc1};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_keystream(c: &mut Criterion) {
    let mut jc1 = Jc1::new(b"SecretKey");
    let mut uber = UberJc1::new(b"SecretKey");
    let mut buf = [0u8; 1024];

    c.bench_function("jc1 fill 1 KiB", |b| {
        b.iter(|| jc1.fill(black_box(&mut buf)))
    });

    c.bench_function("uber_jc1 fill 1 KiB", |b| {
        b.iter(|| uber.fill(black_box(&mut buf)))
    });

    c.bench_function("jc1 new", |b| b.iter(|| Jc1::new(black_box(b"SecretKey"))));
}

criterion_group!(benches, bench_keystream);
criterion_main!(benches);
