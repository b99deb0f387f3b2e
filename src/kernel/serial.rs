/// Single-threaded y^T*A*x reduction.
///
/// For each row j, accumulates `A[j*m + i] * x[i]` sequentially over i,
/// multiplies the row sum by `y[j]`, and adds it to the result. With
/// all-ones inputs the result is exactly `(n * m) as f64` (integral
/// doubles are exact up to 2^53), which is what the benchmark's solution
/// check relies on.
///
/// This is the reference the threaded variant is compared against.
///
/// # Arguments
///
/// * `y` - Left vector (length n)
/// * `a` - Matrix A (n × m), row-major
/// * `x` - Right vector (length m)
/// * `n` - Rows of A
/// * `m` - Columns of A
pub fn ytax_serial(y: &[f64], a: &[f64], x: &[f64], n: usize, m: usize) -> f64 {
    let mut result = 0.0;
    for j in 0..n {
        let row = &a[j * m..(j + 1) * m];
        let mut row_sum = 0.0;
        for i in 0..m {
            row_sum += row[i] * x[i];
        }
        result += y[j] * row_sum;
    }
    result
}
