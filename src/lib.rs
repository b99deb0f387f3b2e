//! y^T*A*x host reduction benchmark.
//!
//! Computes the scalar `y^T * A * x` (a matrix-vector product followed by
//! a dot product) over flat row-major buffers, times repeated runs, and
//! estimates memory bandwidth. The kernel is memory-bound: each repetition
//! reads A once, re-reads x per row, and reads y once, which is exactly
//! the traffic the bandwidth report models.
//!
//! ## Usage
//!
//! ```
//! use ytax::ytax;
//!
//! let n = 64;
//! let m = 32;
//! let y = vec![1.0f64; n];
//! let a = vec![1.0f64; n * m];
//! let x = vec![1.0f64; m];
//!
//! let result = ytax(&y, &a, &x, n, m);
//! assert_eq!(result, (n * m) as f64);
//! ```
//!
//! For large problems, use the multi-threaded version:
//!
//! ```
//! use ytax::ytax_parallel;
//!
//! let n = 4096;
//! let m = 1024;
//! let y = vec![1.0f64; n];
//! let a = vec![1.0f64; n * m];
//! let x = vec![1.0f64; m];
//!
//! let result = ytax_parallel(&y, &a, &x, n, m, 4);
//! assert_eq!(result, (n * m) as f64);
//! ```
//!
//! ## What's inside
//!
//! - Size resolver: derives a consistent {rows, columns, total} from
//!   whatever subset the command line supplies
//! - Serial reference kernel with a strictly sequential inner loop
//! - Threaded kernel: rows chunked across workers, partial sums combined
//!   at join (scales down for small problems)

pub mod kernel;
pub mod sizes;

pub use kernel::serial::ytax_serial;
pub use kernel::threaded::ytax_threaded;
pub use sizes::{Config, ResolvedSizes, SizeError, resolve_dims};

/// Compute `y^T * A * x` single-threaded.
///
/// A is row-major n×m; y has length n, x has length m.
///
/// # Panics
///
/// Panics if the slice sizes don't match n, m.
pub fn ytax(y: &[f64], a: &[f64], x: &[f64], n: usize, m: usize) -> f64 {
    assert_eq!(y.len(), n, "y: expected {} elements", n);
    assert_eq!(a.len(), n * m, "A: expected {}x{}={} elements", n, m, n * m);
    assert_eq!(x.len(), m, "x: expected {} elements", m);

    kernel::serial::ytax_serial(y, a, x, n, m)
}

/// Same as [`ytax`] but splits the outer row loop across threads.
///
/// Thread count adapts to problem size - small problems use fewer threads
/// because the overhead isn't worth it. The combined result equals the
/// serial result bit-for-bit on all-ones input; on general input the
/// outer summation order differs, so compare with a tolerance.
pub fn ytax_parallel(
    y: &[f64],
    a: &[f64],
    x: &[f64],
    n: usize,
    m: usize,
    num_threads: usize,
) -> f64 {
    assert_eq!(y.len(), n, "y: expected {} elements", n);
    assert_eq!(a.len(), n * m, "A: expected {}x{}={} elements", n, m, n * m);
    assert_eq!(x.len(), m, "x: expected {} elements", m);

    kernel::threaded::ytax_threaded(y, a, x, n, m, num_threads)
}
