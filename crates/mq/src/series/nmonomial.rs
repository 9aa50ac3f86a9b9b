//! Monomial-count series of polynomial rings.

use super::Series;
use cryptoforge_core::numerics::is_prime_power;

/// Number of monomials per degree in `n` variables, restricted to
/// exponents below `q` when a field order is given:
///
/// ```text
/// q absent:  1 / (1 - z)^n
/// q given:   ((1 - z^q) / (1 - z))^n
/// ```
pub struct NMonomialSeries {
    of_degree: Series,
    up_to: Series,
}

impl NMonomialSeries {
    pub fn new(n: u64, q: Option<u64>, max_prec: usize) -> Self {
        let of_degree = match q {
            Some(q) => {
                assert!(is_prime_power(q), "field order must be a prime power");
                Series::one_minus_power(max_prec, q as usize)
                    .div_one_minus_x()
                    .pow(n)
            }
            None => {
                let mut acc = Series::one(max_prec);
                for _ in 0..n {
                    acc = acc.div_one_minus_x();
                }
                acc
            }
        };
        let up_to = of_degree.div_one_minus_x();
        Self { of_degree, up_to }
    }

    /// Monomials of degree exactly `d`.
    pub fn nmonomials_of_degree(&self, d: usize) -> f64 {
        self.of_degree.coeff(d) as f64
    }

    /// Monomials of degree at most `d`.
    pub fn nmonomials_up_to_degree(&self, d: usize) -> f64 {
        self.up_to.coeff(d) as f64
    }

    /// Exact count for dimension arguments that must not lose bits.
    pub(crate) fn nmonomials_up_to_degree_exact(&self, d: usize) -> i128 {
        self.up_to.coeff(d)
    }
}

/// Monomials of degree at most `d` in `n` variables over F_q.
pub fn nmonomials_up_to_degree(d: usize, n: u64, q: Option<u64>) -> f64 {
    NMonomialSeries::new(n, q, d + 1).nmonomials_up_to_degree(d)
}
