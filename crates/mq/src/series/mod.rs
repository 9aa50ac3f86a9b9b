//! Truncated integer power series backing the algebraic degree bounds.

pub mod hilbert;
pub mod nmonomial;

pub use hilbert::HilbertSeries;
pub use nmonomial::{nmonomials_up_to_degree, NMonomialSeries};

/// A power series truncated at a fixed precision, with saturating `i128`
/// coefficients. Saturation only matters astronomically far from the
/// low-degree coefficients whose signs the degree bounds inspect.
#[derive(Debug, Clone)]
pub(crate) struct Series {
    coeffs: Vec<i128>,
}

impl Series {
    pub(crate) fn zero(precision: usize) -> Self {
        Self {
            coeffs: vec![0; precision],
        }
    }

    pub(crate) fn one(precision: usize) -> Self {
        let mut s = Self::zero(precision);
        if precision > 0 {
            s.coeffs[0] = 1;
        }
        s
    }

    /// `1 - x^d`.
    pub(crate) fn one_minus_power(precision: usize, d: usize) -> Self {
        let mut s = Self::one(precision);
        if d < precision {
            s.coeffs[d] = -1;
        }
        s
    }

    pub(crate) fn precision(&self) -> usize {
        self.coeffs.len()
    }

    pub(crate) fn coeff(&self, d: usize) -> i128 {
        assert!(
            d < self.coeffs.len(),
            "degree {d} beyond series precision {}",
            self.coeffs.len()
        );
        self.coeffs[d]
    }

    pub(crate) fn mul(&self, other: &Series) -> Series {
        let precision = self.precision();
        let mut out = Series::zero(precision);
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().take(precision - i).enumerate() {
                if b == 0 {
                    continue;
                }
                let prod = a.saturating_mul(b);
                out.coeffs[i + j] = out.coeffs[i + j].saturating_add(prod);
            }
        }
        out
    }

    pub(crate) fn pow(&self, mut exponent: u64) -> Series {
        let mut base = self.clone();
        let mut acc = Series::one(self.precision());
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc.mul(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul(&base);
            }
        }
        acc
    }

    /// Multiplication by `1/(1 - x)`, i.e. prefix sums.
    pub(crate) fn div_one_minus_x(&self) -> Series {
        let mut out = self.clone();
        for i in 1..out.coeffs.len() {
            out.coeffs[i] = out.coeffs[i].saturating_add(out.coeffs[i - 1]);
        }
        out
    }

    /// Multiplication by `1/(1 - x^t)`.
    pub(crate) fn div_one_minus_power(&self, t: usize) -> Series {
        let mut out = self.clone();
        for i in t..out.coeffs.len() {
            out.coeffs[i] = out.coeffs[i].saturating_add(out.coeffs[i - t]);
        }
        out
    }

    /// Index of the first coefficient `<= 0` within the precision.
    pub(crate) fn first_nonpositive(&self) -> Option<usize> {
        self.coeffs.iter().position(|&c| c <= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_expansion() {
        // 1/(1-x) = 1 + x + x^2 + ...
        let s = Series::one(5).div_one_minus_x();
        assert_eq!(s.coeffs, vec![1, 1, 1, 1, 1]);
        // 1/(1-x^2) = 1 + x^2 + x^4 + ...
        let s = Series::one(5).div_one_minus_power(2);
        assert_eq!(s.coeffs, vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_binomial_theorem_via_pow() {
        // (1 + x)^4 = 1 + 4x + 6x^2 + 4x^3 + 4x^4 truncated
        let mut one_plus_x = Series::one(5);
        one_plus_x.coeffs[1] = 1;
        let s = one_plus_x.pow(4);
        assert_eq!(s.coeffs, vec![1, 4, 6, 4, 1]);
    }

    #[test]
    fn test_first_nonpositive() {
        // (1 - x^2)^3 = 1 - 3x^2 + 3x^4 - x^6
        let s = Series::one_minus_power(7, 2).pow(3);
        assert_eq!(s.first_nonpositive(), Some(1));
    }
}
