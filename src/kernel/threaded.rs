//! Multi-threaded y^T*A*x reduction.

use std::thread;

use crate::kernel::serial::ytax_serial;

/// Multi-threaded y^T*A*x reduction.
///
/// Splits rows into contiguous chunks across worker threads. Each thread
/// runs the serial kernel on its chunk and returns a partial sum; the
/// partials are combined by ordinary floating-point addition at join.
/// The per-row inner loop stays sequential, so on all-ones input every
/// partial is integral and the combined result matches the serial kernel
/// bit for bit. Thread count adapts based on problem size:
/// - < 1M FLOPs: 1 thread
/// - < 8M FLOPs: 2 threads
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small problems)
pub fn ytax_threaded(
    y: &[f64],
    a: &[f64],
    x: &[f64],
    n: usize,
    m: usize,
    num_threads: usize,
) -> f64 {
    let effective_threads = choose_thread_count(n, m, num_threads);

    if effective_threads == 1 {
        return ytax_serial(y, a, x, n, m);
    }

    let rows_per_thread = n.div_ceil(effective_threads);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..effective_threads)
            .map(|tid| {
                let start_row = (tid * rows_per_thread).min(n);
                let end_row = (start_row + rows_per_thread).min(n);

                scope.spawn(move || {
                    let y_chunk = &y[start_row..end_row];
                    let a_chunk = &a[start_row * m..end_row * m];
                    ytax_serial(y_chunk, a_chunk, x, end_row - start_row, m)
                })
            })
            .collect();

        handles.into_iter().map(|handle| handle.join().unwrap()).sum()
    })
}

fn choose_thread_count(n: usize, m: usize, max_threads: usize) -> usize {
    let flops = 2.0 * (n * m) as f64;

    const SINGLE_THREAD_THRESHOLD: f64 = 1_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 8_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (n / 64).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads).max(1)
}
