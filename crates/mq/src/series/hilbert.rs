//! Hilbert series of semi-regular polynomial systems.

use super::Series;
use cryptoforge_core::numerics::is_prime_power;

/// The Hilbert series of a semi-regular system of `m` polynomials of the
/// given degrees in `n` variables, optionally over F_q:
///
/// ```text
/// q absent (or large):  Π (1 - x^{d_i}) / (1 - x)^n
/// q < 2m:               Π (1 - x^{d_i}) / (1 - x^{q d_i}) · ((1 - x^q)/(1 - x))^n
/// ```
///
/// The precision `2m` is sufficient for systems whose variable count does
/// not exceed the equation count.
pub struct HilbertSeries {
    series: Series,
    series_up_to: Series,
}

impl HilbertSeries {
    pub fn new(n: u64, degrees: &[u64], q: Option<u64>) -> Self {
        let precision = 2 * degrees.len();
        if let Some(q) = q {
            assert!(is_prime_power(q), "field order must be a prime power");
        }
        let series = match q {
            Some(q) if q < 2 * degrees.len() as u64 => {
                let mut acc = Series::one(precision);
                for &d in degrees {
                    acc = acc
                        .mul(&Series::one_minus_power(precision, d as usize))
                        .div_one_minus_power((d * q) as usize);
                }
                let counting = Series::one_minus_power(precision, q as usize).div_one_minus_x();
                acc.mul(&counting.pow(n))
            }
            _ => {
                let mut acc = Series::one(precision);
                for &d in degrees {
                    acc = acc.mul(&Series::one_minus_power(precision, d as usize));
                }
                for _ in 0..n {
                    acc = acc.div_one_minus_x();
                }
                acc
            }
        };
        let series_up_to = series.div_one_minus_x();
        Self {
            series,
            series_up_to,
        }
    }

    pub fn precision(&self) -> usize {
        self.series.precision()
    }

    /// Coefficient of degree `d`; asking beyond the precision is a
    /// programmer error.
    pub fn coefficient(&self, d: usize) -> i128 {
        self.series.coeff(d)
    }

    /// Coefficient of degree `d` in the series divided by `(1 - x)`.
    pub fn coefficient_up_to(&self, d: usize) -> i128 {
        self.series_up_to.coeff(d)
    }

    pub fn first_nonpositive(&self) -> Option<usize> {
        self.series.first_nonpositive()
    }

    pub fn first_nonpositive_up_to(&self) -> Option<usize> {
        self.series_up_to.first_nonpositive()
    }
}
