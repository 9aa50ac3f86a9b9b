//! Witness degree and degree of regularity of quadratic systems.

use crate::series::HilbertSeries;

/// Witness degree of a semi-regular system of `m` quadrics in `n`
/// variables: the first non-positive coefficient of the Hilbert series
/// divided by `(1 - x)`. `None` when the system is not overdetermined
/// enough for the bound to apply.
pub fn witness_degree_quadratic(n: u64, m: u64, q: Option<u64>) -> Option<usize> {
    if (q.is_none() && m <= n) || (q.is_some() && m < n) {
        return None;
    }
    HilbertSeries::new(n, &vec![2; m as usize], q).first_nonpositive_up_to()
}

/// Degree of regularity of a semi-regular system of `m` quadrics in `n <=
/// m` variables: the first non-positive coefficient of the Hilbert series.
pub fn degree_of_regularity_quadratic(n: u64, m: u64, q: Option<u64>) -> Option<usize> {
    if n > m {
        return None;
    }
    HilbertSeries::new(n, &vec![2; m as usize], q).first_nonpositive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_degrees() {
        assert_eq!(witness_degree_quadratic(10, 15, None), Some(5));
        assert_eq!(witness_degree_quadratic(10, 15, Some(2)), Some(4));
        assert_eq!(witness_degree_quadratic(15, 15, Some(7)), Some(12));
        assert_eq!(witness_degree_quadratic(10, 9, Some(2)), None);
    }

    #[test]
    fn test_degrees_of_regularity() {
        assert_eq!(degree_of_regularity_quadratic(10, 15, None), Some(4));
        assert_eq!(degree_of_regularity_quadratic(10, 15, Some(2)), Some(3));
        assert_eq!(degree_of_regularity_quadratic(15, 15, None), Some(16));
        assert_eq!(degree_of_regularity_quadratic(16, 15, None), None);
    }
}
