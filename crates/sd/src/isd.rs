//! Shared cost routines of information-set decoding.
//!
//! Magnitudes here mirror the integer pipelines of the underlying
//! estimates (floored divisions, list sizes), so they are plain `f64`
//! magnitudes rather than logarithms unless the name says otherwise.

use cryptoforge_core::numerics::log2_add;

/// Cost of one Gaussian elimination on an `(n-k) x n` system with
/// method-of-four-russians blocking `r` (`r = 0` disables blocking).
pub fn gaussian_elimination_complexity(n: u64, k: u64, r: i64) -> f64 {
    if r != 0 {
        let r = r as u64;
        let per_pass = (r * r + (n - k - r)) as f64 + 2f64.powi(r as i32);
        return per_pass * ((n + r - 1) / r) as f64;
    }
    ((n - k) * (n - k)) as f64
}

/// log₂ of [`gaussian_elimination_complexity`], safe for block sizes whose
/// table no longer fits in a float.
pub fn log2_gaussian_elimination_complexity(n: u64, k: u64, r: i64) -> f64 {
    if r == 0 {
        return (((n - k) * (n - k)) as f64).log2();
    }
    let r = r as u64;
    let passes = (((n + r - 1) / r) as f64).log2();
    let linear = ((r * r + (n - k - r)) as f64).log2();
    log2_add(linear, r as f64) + passes
}

/// Block size minimising the Gaussian-elimination cost, subject to the
/// blocking table fitting into `mem` (log₂ elements).
pub fn optimize_m4ri(n: u64, k: u64, mem: f64) -> i64 {
    let mut best = 0i64;
    let mut best_cost = f64::INFINITY;
    for i in 0..(n - k) as i64 {
        let cost = log2_gaussian_elimination_complexity(n, k, i);
        if best_cost > cost && (i as f64) < mem {
            best = i;
            best_cost = cost;
        }
    }
    best
}

/// Memory of the parity-check matrix plus the blocking table, in vector
/// elements.
pub fn mem_matrix(n: u64, k: u64, r: i64) -> f64 {
    (n - k) as f64 + 2f64.powi(r as i32)
}

/// Cost of merging two size-`l_size` lists on `l` matching bits.
pub fn list_merge_complexity(l_size: f64, l: i64, hmap: bool) -> f64 {
    if l_size == 1.0 {
        return 1.0;
    }
    let collisions = (l_size * l_size / 2f64.powi(l as i32)).floor();
    if hmap {
        2.0 * l_size + collisions
    } else {
        (2.0 * l_size.log2().floor() * l_size + collisions).max(1.0)
    }
}
