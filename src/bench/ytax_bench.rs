//! Criterion benchmarks for the y^T*A*x kernels.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ytax::kernel::serial::ytax_serial;
use ytax::kernel::threaded::ytax_threaded;

fn bench_kernels(c: &mut Criterion) {
    let shapes = [(1024, 256), (4096, 1024), (8192, 2048)];

    let mut group = c.benchmark_group("ytax");

    for (n, m) in shapes {
        let y = vec![1.0f64; n];
        let a = vec![1.0f64; n * m];
        let x = vec![1.0f64; m];

        // Bytes touched per run: A once, x per row, y once.
        let bytes = 8 * (m + m * n + n) as u64;
        group.throughput(Throughput::Bytes(bytes));

        group.bench_with_input(
            BenchmarkId::new("serial", format!("{}x{}", n, m)),
            &(n, m),
            |b, &(n, m)| b.iter(|| ytax_serial(black_box(&y), black_box(&a), black_box(&x), n, m)),
        );

        group.bench_with_input(
            BenchmarkId::new("threaded", format!("{}x{}", n, m)),
            &(n, m),
            |b, &(n, m)| {
                b.iter(|| ytax_threaded(black_box(&y), black_box(&a), black_box(&x), n, m, 4))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
