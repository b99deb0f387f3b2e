//! The y^T*A*x reduction kernels.
//!
//! Both variants compute `sum_j y[j] * (sum_i A[j*m + i] * x[i])` with a
//! plain sequential accumulation over each row, so the per-row sums are
//! identical between them. Only the outer combination order differs.
//!
//! Available implementations:
//! - `serial`: single-threaded reference
//! - `threaded`: outer loop chunked across worker threads

pub mod serial;
pub mod threaded;
