//! Problem size resolution and validation.
//!
//! The benchmark takes up to three of {rows N, columns M, total size S}
//! on the command line and derives the rest. Resolution and validation
//! are separate steps so the caller can echo the resolved sizes before
//! validation rejects them.

use thiserror::Error;

/// Default total size when neither S nor both of N, M are given: 2^22.
pub const DEFAULT_TOTAL_EXP: u32 = 22;

/// Row length cap when both N and M are unset.
const DEFAULT_COLS: i64 = 1024;

/// Unset marker for a dimension during resolution.
const UNSET: i64 = -1;

/// Sizes after resolution, before validation.
///
/// May be inconsistent (e.g. `n * m != s` when truncating division was
/// involved); [`ResolvedSizes::validate`] decides that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSizes {
    /// Total element count of A.
    pub s: i64,
    /// Column count (length of x).
    pub m: i64,
    /// Row count (length of y).
    pub n: i64,
}

/// A fully validated benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Rows of A, length of y.
    pub rows: usize,
    /// Columns of A, length of x.
    pub cols: usize,
    /// Total elements of A; always `rows * cols`.
    pub total: usize,
    /// Number of timed repetitions.
    pub nrepeat: usize,
}

/// Fatal size errors. The binary prints these and exits with status 1.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    /// A resolved dimension or the repeat count is below zero.
    #[error("Sizes must be greater than 0")]
    Negative,
    /// The resolved sizes don't satisfy N*M = S.
    #[error("N*M != S (N = {n}, M = {m}, S = {s})")]
    Inconsistent { n: i64, m: i64, s: i64 },
}

/// Derive a full set of sizes from whichever subset was supplied.
///
/// Resolution order:
/// 1. S unset and either dimension unset: S = 2^22, raised to any
///    dimension already larger than that.
/// 2. S unset (both dimensions set): S = N*M.
/// 3. Both dimensions unset: M = min(S, 1024).
/// 4. Only M unset: M = S/N (truncating).
/// 5. Only N unset: N = S/M (truncating).
///
/// Truncating division can leave `n * m != s`; that is deliberate and
/// caught by [`ResolvedSizes::validate`] rather than silently corrected.
/// Division by a zero dimension resolves the other dimension to 0.
pub fn resolve_dims(rows: Option<i64>, cols: Option<i64>, total: Option<i64>) -> ResolvedSizes {
    let mut n = rows.unwrap_or(UNSET);
    let mut m = cols.unwrap_or(UNSET);
    let mut s = total.unwrap_or(UNSET);

    if s == UNSET && (n == UNSET || m == UNSET) {
        s = 1 << DEFAULT_TOTAL_EXP;
        if s < n {
            s = n;
        }
        if s < m {
            s = m;
        }
    }

    if s == UNSET {
        s = n.saturating_mul(m);
    }

    if n == UNSET && m == UNSET {
        m = s.min(DEFAULT_COLS);
    }

    if m == UNSET {
        m = s.checked_div(n).unwrap_or(0);
    }

    if n == UNSET {
        n = s.checked_div(m).unwrap_or(0);
    }

    ResolvedSizes { s, m, n }
}

impl ResolvedSizes {
    /// Check the resolved sizes and repeat count, producing a [`Config`].
    ///
    /// Fails if any of S, M, N or `nrepeat` is negative, or if N*M does
    /// not equal S exactly (an overflowing product can never match).
    pub fn validate(self, nrepeat: i64) -> Result<Config, SizeError> {
        let Self { s, m, n } = self;

        if s < 0 || m < 0 || n < 0 || nrepeat < 0 {
            return Err(SizeError::Negative);
        }

        match n.checked_mul(m) {
            Some(product) if product == s => Ok(Config {
                rows: n as usize,
                cols: m as usize,
                total: s as usize,
                nrepeat: nrepeat as usize,
            }),
            _ => Err(SizeError::Inconsistent { n, m, s }),
        }
    }
}
