//! Log₂-space combinatorics used by the cost functions.
//!
//! Everything here is pure. The convention throughout the workspace is that
//! complexities are base-2 logarithms; `f64::INFINITY` means "infeasible"
//! and is absorbed rather than raised. Passing a structurally nonsensical
//! argument (a probability outside `[0, 1]`) is a programmer error and
//! panics.

/// `log2(n!)`, with `log2(0!) = log2(1!) = 0`.
pub fn log2_factorial(n: u64) -> f64 {
    (2..=n).map(|i| (i as f64).log2()).sum()
}

/// `log2(C(n, k))`; `0.0` when `k < 0` or `k > n`.
pub fn log2_binomial(n: u64, k: i64) -> f64 {
    if k < 0 || k as u64 > n {
        return 0.0;
    }
    let k = (k as u64).min(n - k as u64);
    (0..k)
        .map(|i| ((n - i) as f64).log2() - ((i + 1) as f64).log2())
        .sum()
}

/// `log2(n! / (k_1! ··· k_m! (n - Σk_i)!))`; `0.0` when the parts exceed `n`.
pub fn log2_multinomial(n: u64, parts: &[u64]) -> f64 {
    let total: u64 = parts.iter().sum();
    if total > n {
        return 0.0;
    }
    let mut acc = log2_factorial(n) - log2_factorial(n - total);
    for &k in parts {
        acc -= log2_factorial(k);
    }
    acc
}

/// `C(n, k)` in magnitude form; `0.0` when `k < 0` or `k > n`.
///
/// Cost formulas that mirror integer pipelines (floored divisions, list
/// sizes) need the magnitude, not the logarithm. The multiplicative
/// evaluation keeps the relative error around machine epsilon for every
/// value representable in `f64`.
pub fn binomial(n: u64, k: i64) -> f64 {
    if k < 0 || k as u64 > n {
        return 0.0;
    }
    let k = (k as u64).min(n - k as u64);
    let mut acc = 1.0f64;
    for i in 0..k {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
    }
    acc.round()
}

/// Binary entropy `H(x)`; zero at both endpoints.
pub fn binary_entropy(x: f64) -> f64 {
    assert!(
        (0.0..=1.0).contains(&x),
        "entropy argument must lie in [0, 1], got {x}"
    );
    if x == 0.0 || x == 1.0 {
        return 0.0;
    }
    -(x * x.log2() + (1.0 - x) * (1.0 - x).log2())
}

/// Gaussian binomial `[m, r]_q` in magnitude form.
pub fn gaussian_binomial(m: u64, r: u64, q: u64) -> f64 {
    let qf = q as f64;
    let mut acc = 1.0f64;
    for i in 0..r {
        let num = 1.0 - qf.powf((m - i) as f64);
        let den = 1.0 - qf.powf((i + 1) as f64);
        if num.is_finite() && den.is_finite() {
            acc *= num / den;
        } else {
            // Both sides overflowed; the ratio degenerates to a power of q.
            acc *= qf.powf((m - i) as f64 - (i + 1) as f64);
        }
    }
    acc
}

/// `log2(2^a + 2^b)` with `+INFINITY` absorbing.
pub fn log2_add(a: f64, b: f64) -> f64 {
    if a == f64::INFINITY || b == f64::INFINITY {
        return f64::INFINITY;
    }
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    hi + (1.0 + 2f64.powf(lo - hi)).log2()
}

/// Rounds (or truncates) `x` to `precision` fractional digits and formats it.
pub fn round_or_truncate(x: f64, truncate: bool, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let val = if truncate {
        (x * scale).trunc() / scale
    } else {
        (x * scale).round() / scale
    };
    format!("{val:.precision$}")
}

/// Whether `q` is a prime power.
pub fn is_prime_power(q: u64) -> bool {
    if q < 2 {
        return false;
    }
    let mut p = 2;
    while p * p <= q {
        if q % p == 0 {
            let mut rest = q;
            while rest % p == 0 {
                rest /= p;
            }
            return rest == 1;
        }
        p += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_factorial_small_values() {
        assert_eq!(log2_factorial(0), 0.0);
        assert_eq!(log2_factorial(1), 0.0);
        assert!((log2_factorial(5) - (120f64).log2()).abs() < 1e-12);
    }

    #[test]
    fn test_log2_binomial_matches_exact() {
        assert!((log2_binomial(100, 10) - (17310309456440f64).log2()).abs() < 1e-9);
        assert_eq!(log2_binomial(10, -1), 0.0);
        assert_eq!(log2_binomial(10, 11), 0.0);
    }

    #[test]
    fn test_binomial_magnitude() {
        assert_eq!(binomial(25, 2), 300.0);
        assert_eq!(binomial(50, 4), 230300.0);
        assert_eq!(binomial(4, 7), 0.0);
        assert_eq!(binomial(4, -2), 0.0);
    }

    #[test]
    fn test_multinomial_splits_factorials() {
        // 6! / (2! 2! 2!) = 90
        assert!((log2_multinomial(6, &[2, 2]) - (90f64).log2()).abs() < 1e-9);
    }

    #[test]
    fn test_binary_entropy_symmetry() {
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
        assert!((binary_entropy(0.5) - 1.0).abs() < 1e-12);
        assert!((binary_entropy(0.11) - binary_entropy(0.89)).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_binomial_small() {
        // [4, 2]_2 = 35
        assert!((gaussian_binomial(4, 2, 2) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_log2_add() {
        assert!((log2_add(3.0, 3.0) - 4.0).abs() < 1e-12);
        assert_eq!(log2_add(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(log2_add(f64::NEG_INFINITY, 7.0), 7.0);
        assert!((log2_add(20.0, 0.0) - 20.000001375).abs() < 1e-6);
    }

    #[test]
    fn test_round_or_truncate() {
        assert_eq!(round_or_truncate(28.839, false, 1), "28.8");
        assert_eq!(round_or_truncate(28.89, true, 1), "28.8");
        assert_eq!(round_or_truncate(28.89, false, 1), "28.9");
        assert_eq!(round_or_truncate(12.0, false, 3), "12.000");
    }

    #[test]
    fn test_is_prime_power() {
        for q in [2, 3, 4, 8, 9, 27, 31, 1024] {
            assert!(is_prime_power(q), "{q} is a prime power");
        }
        for q in [0, 1, 6, 12, 15, 100] {
            assert!(!is_prime_power(q), "{q} is not a prime power");
        }
    }
}
